//! Generic table over a column list.

use super::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_utils::{header_check_state, set_all, set_one, SortState};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
type RowComparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub title: &'static str,
    align_right: bool,
    render: CellRenderer<T>,
    compare: Option<RowComparator<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            align_right: self.align_right,
            render: self.render.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn new(
        key: &'static str,
        title: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            title,
            align_right: false,
            render: Arc::new(render),
            compare: None,
        }
    }

    pub fn text(
        key: &'static str,
        title: &'static str,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, title, move |row| value(row).into_any())
    }

    pub fn sortable(mut self, compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }
}

/// Checkbox selection over rows. Rows rejected by `is_selectable` get a
/// disabled box and are skipped by "select all".
pub struct RowSelection<T> {
    pub selected: RwSignal<HashSet<String>>,
    pub is_selectable: fn(&T) -> bool,
}

impl<T> Clone for RowSelection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowSelection<T> {}

pub type RowActions<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    row_id: fn(&T) -> String,
    #[prop(optional)] selection: Option<RowSelection<T>>,
    /// Trailing cell with per-row buttons.
    #[prop(optional)]
    actions: Option<RowActions<T>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let sort = RwSignal::new(SortState::default());
    let empty_text = empty_text.unwrap_or_else(|| "No records".to_string());

    let sorted_rows = Signal::derive(move || {
        let mut data = rows.get();
        sort.with(|s| {
            let compare = s.field.and_then(|field| {
                columns.with_value(|cols| {
                    cols.iter()
                        .find(|c| c.key == field)
                        .and_then(|c| c.compare.clone())
                })
            });
            if let Some(compare) = compare {
                s.apply(&mut data, |a, b| compare(a, b));
            }
        });
        data
    });

    let selectable_ids = move |sel: &RowSelection<T>| -> Vec<String> {
        sorted_rows.with(|rs| {
            rs.iter()
                .filter(|r| (sel.is_selectable)(r))
                .map(row_id)
                .collect()
        })
    };

    let header_checkbox = selection.map(|sel| {
        let state = Signal::derive(move || {
            let ids = selectable_ids(&sel);
            sel.selected.with(|s| header_check_state(&ids, s))
        });
        let nothing_selectable = Signal::derive(move || selectable_ids(&sel).is_empty());
        view! {
            <TableHeaderCheckbox
                state=state
                disabled=nothing_selectable
                on_change=Callback::new(move |check: bool| {
                    let ids = selectable_ids(&sel);
                    sel.selected.update(|s| set_all(&ids, s, check));
                })
            />
        }
    });

    let colspan = move || {
        columns.with_value(|c| c.len())
            + usize::from(selection.is_some())
            + usize::from(actions.with_value(|a| a.is_some()))
    };

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header_checkbox}
                        {columns.with_value(|cols| cols.iter().map(|c| {
                            let key = c.key;
                            let sortable = c.compare.is_some();
                            let title = c.title;
                            view! {
                                <TableHeaderCell class=if c.align_right { "table__cell--right" } else { "" }>
                                    <div
                                        class="table__sortable-header"
                                        class:table__sortable-header--active=sortable
                                        on:click=move |_| if sortable { sort.update(|s| s.toggle(key)) }
                                    >
                                        {title}
                                        <span class="table__sort-indicator">
                                            {move || sort.with(|s| s.indicator(key))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                            }
                        }).collect_view())}
                        {actions.with_value(|a| a.is_some()).then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let data = sorted_rows.get();
                        if data.is_empty() {
                            let text = empty_text.clone();
                            let span = colspan();
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=span>
                                        <div class="table__empty">{text}</div>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        data.into_iter().map(|row| {
                            let id = row_id(&row);
                            let checkbox = selection.map(|sel| {
                                let selectable = (sel.is_selectable)(&row);
                                let id_for_check = id.clone();
                                let id_for_change = id.clone();
                                view! {
                                    <TableCellCheckbox
                                        checked=Signal::derive(move || sel.selected.with(|s| s.contains(&id_for_check)))
                                        disabled=!selectable
                                        on_change=Callback::new(move |check: bool| {
                                            sel.selected.update(|s| set_one(s, id_for_change.clone(), check));
                                        })
                                    />
                                }
                            });
                            let cells = columns.with_value(|cols| cols.iter().map(|c| {
                                let class = if c.align_right { "table__cell--right" } else { "" };
                                let content = (c.render)(&row);
                                view! {
                                    <TableCell class=class>
                                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                                    </TableCell>
                                }
                            }).collect_view());
                            let action_cell = actions.with_value(|a| a.as_ref().map(|render| {
                                let buttons = render(&row);
                                view! { <TableCell class="table__cell--actions">{buttons}</TableCell> }
                            }));
                            view! {
                                <TableRow>
                                    {checkbox}
                                    {cells}
                                    {action_cell}
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
