use super::date_input::DateInput;
use super::pagination_controls::PaginationControls;
use crate::shared::date_utils::{from_input_value, to_input_value};
use crate::shared::icons::icon;
use contracts::shared::query::ListFilter;
use contracts::shared::reference::Project;
use contracts::shared::PageCursor;
use leptos::prelude::*;
use thaw::*;

/// Which inputs a list page offers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterFields {
    pub project: bool,
    pub dates: bool,
    pub search: bool,
}

/// Raw input values of the panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    pub project_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub search: String,
}

impl FilterDraft {
    pub fn from_filter(filter: &ListFilter) -> Self {
        Self {
            project_id: filter.project_id.map(|id| id.to_string()).unwrap_or_default(),
            start_date: to_input_value(filter.start_date),
            end_date: to_input_value(filter.end_date),
            status: filter.status.clone().unwrap_or_default(),
            search: filter.search.clone().unwrap_or_default(),
        }
    }

    /// Blank inputs become "no filter". A reversed date range is swapped.
    pub fn to_filter(&self) -> ListFilter {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        let mut start_date = from_input_value(&self.start_date);
        let mut end_date = from_input_value(&self.end_date);
        if let (Some(s), Some(e)) = (start_date, end_date) {
            if s > e {
                start_date = Some(e);
                end_date = Some(s);
            }
        }
        ListFilter {
            project_id: self.project_id.trim().parse().ok(),
            start_date,
            end_date,
            status: non_blank(&self.status),
            search: non_blank(&self.search),
        }
    }
}

/// Collapsible filter bar above a list, with the pagination on the right.
#[component]
pub fn FilterPanel(
    #[prop(into)] applied: Signal<ListFilter>,
    on_apply: Callback<ListFilter>,
    fields: FilterFields,
    #[prop(optional)] projects: Option<RwSignal<Vec<Project>>>,
    /// `(value, label)` pairs; no status select when absent.
    #[prop(optional)]
    statuses: Option<Vec<(String, String)>>,
    #[prop(into)] cursor: Signal<PageCursor>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let initial = FilterDraft::from_filter(&applied.get_untracked());
    let project_id = RwSignal::new(initial.project_id);
    let start_date = RwSignal::new(initial.start_date);
    let end_date = RwSignal::new(initial.end_date);
    let status = RwSignal::new(initial.status);
    let search = RwSignal::new(initial.search);

    let draft = move || FilterDraft {
        project_id: project_id.get_untracked(),
        start_date: start_date.get_untracked(),
        end_date: end_date.get_untracked(),
        status: status.get_untracked(),
        search: search.get_untracked(),
    };
    let apply = move || on_apply.run(draft().to_filter());
    let reset = move || {
        for s in [project_id, start_date, end_date, status, search] {
            s.set(String::new());
        }
        on_apply.run(ListFilter::default());
    };

    let active_filters_count = Signal::derive(move || applied.with(|f| f.active_count()));
    let has_status = statuses.is_some();
    let statuses = StoredValue::new(statuses.unwrap_or_default());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=move |_| is_expanded.update(|e| *e = !*e)>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls cursor=cursor on_page_change=on_page_change />
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        {(fields.project && projects.is_some()).then(|| {
                            let projects = projects.unwrap_or_else(|| RwSignal::new(Vec::new()));
                            view! {
                                <div class="form__group">
                                    <Label>"Project"</Label>
                                    <Select value=project_id>
                                        <option value="">"All projects"</option>
                                        {move || projects.get().into_iter().map(|p| view! {
                                            <option value=p.id.to_string()>{p.name}</option>
                                        }).collect_view()}
                                    </Select>
                                </div>
                            }
                        })}
                        {fields.dates.then(|| view! {
                            <div class="form__group">
                                <Label>"From"</Label>
                                <DateInput value=start_date />
                            </div>
                            <div class="form__group">
                                <Label>"To"</Label>
                                <DateInput value=end_date />
                            </div>
                        })}
                        {has_status.then(|| view! {
                            <div class="form__group">
                                <Label>"Status"</Label>
                                <Select value=status>
                                    <option value="">"Any status"</option>
                                    {statuses.with_value(|list| list.iter().map(|(value, label)| view! {
                                        <option value=value.clone()>{label.clone()}</option>
                                    }).collect_view())}
                                </Select>
                            </div>
                        })}
                        {fields.search.then(|| view! {
                            <div class="form__group">
                                <Label>"Search"</Label>
                                <Input value=search placeholder="Name, badge..." />
                            </div>
                        })}
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply()>
                            {icon("search")}
                            " Apply"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset()>
                            "Reset"
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn blank_draft_is_empty_filter() {
        assert!(FilterDraft::default().to_filter().is_empty());
    }

    #[test]
    fn draft_parses_inputs() {
        let draft = FilterDraft {
            project_id: "3".into(),
            start_date: "2024-05-01".into(),
            end_date: "2024-05-31".into(),
            status: "Pending".into(),
            search: "  ali ".into(),
        };
        let f = draft.to_filter();
        assert_eq!(f.project_id, Some(3));
        assert_eq!(f.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(f.status.as_deref(), Some("Pending"));
        assert_eq!(f.search.as_deref(), Some("ali"));
        assert_eq!(FilterDraft::from_filter(&f).project_id, "3");
    }

    #[test]
    fn reversed_range_is_swapped() {
        let draft = FilterDraft {
            start_date: "2024-06-10".into(),
            end_date: "2024-06-01".into(),
            ..Default::default()
        };
        let f = draft.to_filter();
        assert_eq!(f.start_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(f.end_date, NaiveDate::from_ymd_opt(2024, 6, 10));
    }
}
