use crate::domain::a003_dc_stock::ui::details::DcStockDetails;
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
use contracts::domain::a003_dc_stock::aggregate::{DcStock, DcStockForm, DcStocks};
use contracts::shared::ListResource;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<Column<DcStock>> {
    vec![
        Column::text("uniform", "Uniform", |r: &DcStock| r.uniform_name.clone())
            .sortable(|a, b| a.uniform_name.cmp(&b.uniform_name)),
        Column::text("code", "Code", |r: &DcStock| r.code.clone()),
        Column::text("size", "Size", |r: &DcStock| r.size.clone()),
        Column::text("gender", "Gender", |r: &DcStock| r.gender.clone()),
        Column::text("stock", "In stock", |r: &DcStock| format_count(r.stock_count))
            .right()
            .sortable(|a, b| a.stock_count.cmp(&b.stock_count)),
        Column::text("unit_price", "Unit price", |r: &DcStock| format_money(r.unit_price)).right(),
        Column::text("total", "Total", |r: &DcStock| format_money(r.total_price))
            .right()
            .sortable(|a, b| a.total_price.total_cmp(&b.total_price)),
        Column::text("created", "Created", |r: &DcStock| format_date_opt(r.created_date.as_deref())),
    ]
}

#[component]
pub fn DcStockList() -> impl IntoView {
    let list = PagedList::<DcStocks>::new();
    let uniforms = load_reference::<Uniforms>();
    let editing = RwSignal::new(None::<DcStockForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    let actions: RowActions<DcStock> = Arc::new(move |row: &DcStock| {
        let form = DcStockForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("stock of {}", row.uniform_name),
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
        <PageFrame page_id="a003_dc_stock--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="DC stock"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(DcStockForm::default())))
                create_label="New stock"
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
                    fallback=|| view! { <LoadingSpinner caption="Loading stock..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &DcStock| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <DcStockDetails
                    form=form
                    uniforms=uniforms
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
                endpoint=DcStocks::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
