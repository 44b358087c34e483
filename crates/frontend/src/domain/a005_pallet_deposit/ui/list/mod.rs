use crate::domain::a005_pallet_deposit::ui::details::PalletDepositDetails;
use crate::shared::components::table::{format_count, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::date_utils::{format_date_opt, today_input_value};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use contracts::domain::a005_pallet_deposit::aggregate::{
    PalletDeposit, PalletDepositForm, PalletDeposits,
};
use contracts::shared::reference::Projects;
use contracts::shared::ListResource;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<Column<PalletDeposit>> {
    vec![
        Column::text("project", "Project", |r: &PalletDeposit| r.project_name.clone())
            .sortable(|a, b| a.project_name.cmp(&b.project_name)),
        Column::text("count", "Deposited pallets", |r: &PalletDeposit| format_count(r.deposit_count))
            .right()
            .sortable(|a, b| a.deposit_count.cmp(&b.deposit_count)),
        Column::text("date", "Date", |r: &PalletDeposit| format_date_opt(r.date.as_deref()))
            .sortable(|a, b| a.date.cmp(&b.date)),
    ]
}

#[component]
pub fn PalletDepositList() -> impl IntoView {
    let list = PagedList::<PalletDeposits>::new();
    let projects = load_reference::<Projects>();
    let editing = RwSignal::new(None::<PalletDepositForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    let actions: RowActions<PalletDeposit> = Arc::new(move |row: &PalletDeposit| {
        let form = PalletDepositForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("the deposit of {} pallets for {}", row.deposit_count, row.project_name),
        };
        view! {
            <RowActionButtons
                on_edit=Callback::new(move |_| editing.set(Some(form.clone())))
                on_delete=Callback::new(move |_| deleting.set(Some(target.clone())))
            />
        }
        .into_any()
    });

    let new_deposit = move || PalletDepositForm {
        date: today_input_value(),
        ..Default::default()
    };

    view! {
        <PageFrame page_id="a005_pallet_deposit--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Pallet deposits"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(new_deposit())))
                create_label="New deposit"
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
                    fallback=|| view! { <LoadingSpinner caption="Loading deposits..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &PalletDeposit| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <PalletDepositDetails
                    form=form
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
                endpoint=PalletDeposits::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
