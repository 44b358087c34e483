use crate::domain::a007_trolley_type::ui::details::TrolleyTypeDetails;
use crate::shared::components::table::{image_cell, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use contracts::domain::a007_trolley_type::aggregate::{TrolleyType, TrolleyTypeForm, TrolleyTypes};
use contracts::shared::ListResource;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<Column<TrolleyType>> {
    vec![
        Column::new("image", "Image", |r: &TrolleyType| image_cell(r.image_url.as_deref(), &r.name)),
        Column::text("name", "Name", |r: &TrolleyType| r.name.clone())
            .sortable(|a, b| a.name.cmp(&b.name)),
        Column::text("description", "Description", |r: &TrolleyType| {
            r.description.clone().unwrap_or_default()
        }),
    ]
}

#[component]
pub fn TrolleyTypeList() -> impl IntoView {
    let list = PagedList::<TrolleyTypes>::new();
    let editing = RwSignal::new(None::<TrolleyTypeForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    let actions: RowActions<TrolleyType> = Arc::new(move |row: &TrolleyType| {
        let form = TrolleyTypeForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("trolley type \"{}\"", row.name),
        };
        view! {
            <RowActionButtons
                on_edit=Callback::new(move |_| editing.set(Some(form.clone())))
                on_delete=Callback::new(move |_| deleting.set(Some(target.clone())))
            />
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a007_trolley_type--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Trolley types"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(TrolleyTypeForm::default())))
                create_label="New type"
            />

            <div class="page__content">
                <FilterPanel
                    applied=list.filter
                    on_apply=Callback::new(move |f| list.apply_filter(f))
                    fields=FilterFields { search: true, ..Default::default() }
                    cursor=list.cursor
                    on_page_change=Callback::new(move |p| list.go_to(p))
                />

                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !list.loading.get()
                    fallback=|| view! { <LoadingSpinner caption="Loading trolley types..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &TrolleyType| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <TrolleyTypeDetails
                    form=form
                    on_saved=Callback::new(move |_| {
                        let created = editing.with_untracked(|f| f.as_ref().is_some_and(|f| !f.is_edit()));
                        editing.set(None);
                        if created { list.after_create() } else { list.after_edit() }
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}
            <DeleteDialog
                target=deleting
                endpoint=TrolleyTypes::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
