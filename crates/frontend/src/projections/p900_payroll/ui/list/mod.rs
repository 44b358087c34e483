//! Payroll deductions. Read-only list with a per-page total and export.

use crate::shared::api_utils::export_list;
use crate::shared::components::table::{format_count, format_money, Column, DataTable};
use crate::shared::components::{FilterFields, FilterPanel, ListHeader, LoadingSpinner};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use crate::shared::toast::use_notifier;
use contracts::projections::p900_payroll::dto::{page_deduction_total, PayrollRow, Payrolls};
use contracts::shared::list::Exportable;
use contracts::shared::reference::Projects;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn columns() -> Vec<Column<PayrollRow>> {
    vec![
        Column::text("badge", "Badge", |r: &PayrollRow| r.badge.clone())
            .sortable(|a, b| a.badge.cmp(&b.badge)),
        Column::text("employee", "Employee", |r: &PayrollRow| r.full_name.clone())
            .sortable(|a, b| a.full_name.cmp(&b.full_name)),
        Column::text("project", "Project", |r: &PayrollRow| r.project_name.clone().unwrap_or_default()),
        Column::text("uniform", "Uniform", |r: &PayrollRow| r.uniform_name.clone()),
        Column::text("count", "Count", |r: &PayrollRow| format_count(r.count)).right(),
        Column::text("unit_price", "Unit price", |r: &PayrollRow| format_money(r.unit_price)).right(),
        Column::text("deduction", "Deduction", |r: &PayrollRow| format_money(r.deduction_amount))
            .right()
            .sortable(|a, b| a.deduction_amount.total_cmp(&b.deduction_amount)),
        Column::text("handover_date", "Handed over", |r: &PayrollRow| {
            format_datetime_opt(r.handover_date.as_deref())
        })
        .sortable(|a, b| a.handover_date.cmp(&b.handover_date)),
    ]
}

#[component]
pub fn PayrollList() -> impl IntoView {
    let list = PagedList::<Payrolls>::new();
    let projects = load_reference::<Projects>();
    let notifier = use_notifier();
    let exporting = RwSignal::new(false);
    list.reload();

    let page_total = Signal::derive(move || list.rows.with(|rows| page_deduction_total(rows)));

    let export = move || {
        let filter = list.filter.get_untracked();
        exporting.set(true);
        notifier.info(Payrolls::export_notice());
        spawn_local(async move {
            if let Err(e) = export_list::<Payrolls>(&filter).await {
                log::error!("payroll export: {}", e);
                notifier.error(e.to_string());
            }
            exporting.set(false);
        });
    };

    view! {
        <PageFrame page_id="p900_payroll--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Payroll"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| export()
                    disabled=Signal::derive(move || exporting.get())
                >
                    {icon("download")}
                    {move || if exporting.get() { " Exporting..." } else { " Export" }}
                </Button>
            </ListHeader>

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
                    fallback=|| view! { <LoadingSpinner caption="Loading payroll..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &PayrollRow| r.transaction_id.to_string()
                        empty_text="No deductions for the selected period"
                    />
                    <div class="table__footer">
                        <span>"Deductions on this page"</span>
                        <strong>{move || format_money(page_total.get())}</strong>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
