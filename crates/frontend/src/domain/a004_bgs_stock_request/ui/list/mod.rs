use crate::domain::a004_bgs_stock_request::ui::details::BgsStockRequestDetails;
use crate::shared::components::table::{format_count, format_money, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::date_utils::format_date_opt;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use contracts::domain::a002_uniform::aggregate::Uniforms;
use contracts::domain::a004_bgs_stock_request::aggregate::{
    BgsStockRequest, BgsStockRequestForm, BgsStockRequests, RequesterType,
};
use contracts::shared::reference::Projects;
use contracts::shared::ListResource;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

fn requester_cell(r: &BgsStockRequest) -> AnyView {
    let (color, detail) = match r.requester_type {
        RequesterType::Project => (BadgeColor::Brand, r.project_name.clone().unwrap_or_default()),
        RequesterType::Employee => (
            BadgeColor::Informative,
            r.badge.clone().unwrap_or_default(),
        ),
    };
    let kind = r.requester_type.as_str();
    view! {
        <span class="requester-cell">
            <Badge appearance=BadgeAppearance::Tint color=color>{kind}</Badge>
            " "
            {detail}
        </span>
    }
    .into_any()
}

fn columns() -> Vec<Column<BgsStockRequest>> {
    vec![
        Column::text("uniform", "Uniform", |r: &BgsStockRequest| r.uniform_name.clone())
            .sortable(|a, b| a.uniform_name.cmp(&b.uniform_name)),
        Column::new("requester", "Requested for", requester_cell),
        Column::text("project", "Project", |r: &BgsStockRequest| {
            r.project_name.clone().unwrap_or_default()
        }),
        Column::text("count", "Count", |r: &BgsStockRequest| format_count(r.request_count))
            .right()
            .sortable(|a, b| a.request_count.cmp(&b.request_count)),
        Column::text("unit_price", "Unit price", |r: &BgsStockRequest| format_money(r.unit_price))
            .right(),
        Column::text("total", "Total", |r: &BgsStockRequest| format_money(r.total_price))
            .right()
            .sortable(|a, b| a.total_price.total_cmp(&b.total_price)),
        Column::text("created", "Created", |r: &BgsStockRequest| {
            format_date_opt(r.created_date.as_deref())
        })
        .sortable(|a, b| a.created_date.cmp(&b.created_date)),
    ]
}

#[component]
pub fn BgsStockRequestList() -> impl IntoView {
    let list = PagedList::<BgsStockRequests>::new();
    let uniforms = load_reference::<Uniforms>();
    let projects = load_reference::<Projects>();
    let editing = RwSignal::new(None::<BgsStockRequestForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    let actions: RowActions<BgsStockRequest> = Arc::new(move |row: &BgsStockRequest| {
        let form = BgsStockRequestForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("request #{}", row.id),
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
        <PageFrame page_id="a004_bgs_stock_request--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="BGS stock requests"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(BgsStockRequestForm::default())))
                create_label="New request"
            />

            <div class="page__content">
                <FilterPanel
                    applied=list.filter
                    on_apply=Callback::new(move |f| list.apply_filter(f))
                    fields=FilterFields { project: true, dates: true, search: true }
                    projects=projects
                    cursor=list.cursor
                    on_page_change=Callback::new(move |p| list.go_to(p))
                />

                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !list.loading.get()
                    fallback=|| view! { <LoadingSpinner caption="Loading requests..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &BgsStockRequest| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <BgsStockRequestDetails
                    form=form
                    uniforms=uniforms
                    projects=projects
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
                endpoint=BgsStockRequests::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
