use crate::domain::a006_pallet_counting::api::fetch_day_status;
use crate::domain::a006_pallet_counting::ui::details::PalletCountingDetails;
use crate::shared::components::table::{format_count, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::date_utils::{format_date_opt, today_input_value};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use contracts::domain::a006_pallet_counting::aggregate::{
    PalletCounting, PalletCountingForm, PalletCountings,
};
use contracts::shared::reference::Projects;
use contracts::shared::ListResource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

fn columns() -> Vec<Column<PalletCounting>> {
    vec![
        Column::text("project", "Project", |r: &PalletCounting| r.project_name.clone())
            .sortable(|a, b| a.project_name.cmp(&b.project_name)),
        Column::text("date", "Date", |r: &PalletCounting| format_date_opt(r.date.as_deref()))
            .sortable(|a, b| a.date.cmp(&b.date)),
        Column::text("deposit_auto", "Deposit (auto)", |r: &PalletCounting| format_count(r.deposit_auto))
            .right(),
        Column::text("dc_accepted", "DC accepted", |r: &PalletCounting| format_count(r.dc_accepted))
            .right(),
        Column::text("dc_delivered", "DC delivered", |r: &PalletCounting| format_count(r.dc_delivered))
            .right(),
        Column::text("remainder_auto", "Remainder (auto)", |r: &PalletCounting| {
            format_count(r.remainder_auto)
        })
        .right()
        .sortable(|a, b| a.remainder_auto.cmp(&b.remainder_auto)),
        Column::text("deposit_remainder", "Deposit remainder", |r: &PalletCounting| {
            format_count(r.deposit_remainder)
        })
        .right(),
    ]
}

#[component]
pub fn PalletCountingList() -> impl IntoView {
    let list = PagedList::<PalletCountings>::new();
    let projects = load_reference::<Projects>();
    let editing = RwSignal::new(None::<PalletCountingForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    // Unknown until the backend answers; creation stays disabled meanwhile.
    let day_active = RwSignal::new(None::<bool>);

    let check_day = move || {
        spawn_local(async move {
            match fetch_day_status().await {
                Ok(status) => day_active.set(Some(status.is_day_active)),
                Err(e) => {
                    log::error!("pallet day status: {}", e);
                    day_active.set(Some(false));
                }
            }
        });
    };
    list.reload();
    check_day();

    let actions: RowActions<PalletCounting> = Arc::new(move |row: &PalletCounting| {
        let form = PalletCountingForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("the count for {}", row.project_name),
        };
        view! {
            <RowActionButtons
                on_edit=Callback::new(move |_| editing.set(Some(form.clone())))
                on_delete=Callback::new(move |_| deleting.set(Some(target.clone())))
            />
        }
        .into_any()
    });

    let new_count = move || PalletCountingForm {
        date: today_input_value(),
        ..Default::default()
    };

    view! {
        <PageFrame page_id="a006_pallet_counting--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Pallet counting"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| {
                    list.reload();
                    check_day();
                })
                on_create=Callback::new(move |_| editing.set(Some(new_count())))
                create_label="New count"
                create_disabled=Signal::derive(move || day_active.get() != Some(true))
            />

            <div class="page__content">
                <Show when=move || day_active.get() == Some(false)>
                    <div class="alert alert--warning">
                        {icon("info")}
                        " The counting day is closed. New counts can be entered once the day is opened."
                    </div>
                </Show>

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
                    fallback=|| view! { <LoadingSpinner caption="Loading counts..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &PalletCounting| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <PalletCountingDetails
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
                endpoint=PalletCountings::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
