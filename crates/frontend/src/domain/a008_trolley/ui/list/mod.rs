use crate::domain::a007_trolley_type::api as trolley_types_api;
use crate::domain::a008_trolley::ui::details::TrolleyDetails;
use crate::shared::components::table::{format_count, image_cell, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::date_utils::format_date_opt;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use contracts::domain::a008_trolley::aggregate::{Trolley, TrolleyForm, Trolleys};
use contracts::shared::reference::Projects;
use contracts::shared::ListResource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

fn columns() -> Vec<Column<Trolley>> {
    vec![
        Column::new("image", "Image", |r: &Trolley| {
            image_cell(r.image_url.as_deref(), &r.trolley_type_name)
        }),
        Column::text("project", "Project", |r: &Trolley| r.project_name.clone())
            .sortable(|a, b| a.project_name.cmp(&b.project_name)),
        Column::text("type", "Trolley type", |r: &Trolley| r.trolley_type_name.clone())
            .sortable(|a, b| a.trolley_type_name.cmp(&b.trolley_type_name)),
        Column::text("working", "Working", |r: &Trolley| format_count(r.working_count))
            .right()
            .sortable(|a, b| a.working_count.cmp(&b.working_count)),
        Column::text("broken", "Broken", |r: &Trolley| format_count(r.broken_count))
            .right()
            .sortable(|a, b| a.broken_count.cmp(&b.broken_count)),
        Column::text("total", "Total", |r: &Trolley| format_count(r.total_count())).right(),
        Column::text("date", "Date", |r: &Trolley| format_date_opt(r.date.as_deref()))
            .sortable(|a, b| a.date.cmp(&b.date)),
    ]
}

#[component]
pub fn TrolleyList() -> impl IntoView {
    let list = PagedList::<Trolleys>::new();
    let projects = load_reference::<Projects>();
    let trolley_types = RwSignal::new(Vec::new());
    let editing = RwSignal::new(None::<TrolleyForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    spawn_local(async move {
        match trolley_types_api::fetch_all().await {
            Ok(types) => trolley_types.set(types),
            Err(e) => log::error!("failed to load trolley types: {}", e),
        }
    });

    let actions: RowActions<Trolley> = Arc::new(move |row: &Trolley| {
        let form = TrolleyForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("{} trolleys of {}", row.trolley_type_name, row.project_name),
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
        <PageFrame page_id="a008_trolley--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Trolleys"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(TrolleyForm::default())))
                create_label="New count"
            />

            <div class="page__content">
                <FilterPanel
                    applied=list.filter
                    on_apply=Callback::new(move |f| list.apply_filter(f))
                    fields=FilterFields { project: true, dates: true, search: false }
                    projects=projects
                    cursor=list.cursor
                    on_page_change=Callback::new(move |p| list.go_to(p))
                />

                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !list.loading.get()
                    fallback=|| view! { <LoadingSpinner caption="Loading trolleys..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &Trolley| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <TrolleyDetails
                    form=form
                    projects=projects
                    trolley_types=trolley_types
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
                endpoint=Trolleys::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
