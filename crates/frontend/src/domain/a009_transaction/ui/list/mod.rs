use crate::domain::a009_transaction::api;
use crate::domain::a009_transaction::ui::details::TransactionDetails;
use crate::domain::a009_transaction::ui::reassign::ReassignDialog;
use crate::shared::api_utils::export_list;
use crate::shared::components::table::{format_count, Column, DataTable, RowActions, RowSelection};
use crate::shared::components::{FilterFields, FilterPanel, ListHeader, LoadingSpinner};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use crate::shared::toast::use_notifier;
use contracts::domain::a002_uniform::aggregate::Uniforms;
use contracts::domain::a009_transaction::aggregate::{
    Transaction, TransactionAction, TransactionStatus, Transactions,
};
use contracts::shared::list::Exportable;
use contracts::shared::reference::Projects;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use std::sync::Arc;
use thaw::*;

fn status_badge(status: TransactionStatus) -> AnyView {
    let color = match status {
        TransactionStatus::Pending => BadgeColor::Warning,
        TransactionStatus::Accepted => BadgeColor::Brand,
        TransactionStatus::Handovered => BadgeColor::Success,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge>
    }
    .into_any()
}

fn columns() -> Vec<Column<Transaction>> {
    vec![
        Column::text("badge", "Badge", |r: &Transaction| r.badge.clone())
            .sortable(|a, b| a.badge.cmp(&b.badge)),
        Column::text("employee", "Employee", |r: &Transaction| r.full_name.clone())
            .sortable(|a, b| a.full_name.cmp(&b.full_name)),
        Column::text("project", "Project", |r: &Transaction| r.project_name.clone().unwrap_or_default()),
        Column::text("uniform", "Uniform", |r: &Transaction| r.uniform_name.clone())
            .sortable(|a, b| a.uniform_name.cmp(&b.uniform_name)),
        Column::text("count", "Count", |r: &Transaction| format_count(r.count)).right(),
        Column::new("status", "Status", |r: &Transaction| status_badge(r.status))
            .sortable(|a, b| a.status.as_str().cmp(b.status.as_str())),
        Column::text("sender", "Sent by", |r: &Transaction| r.sender_name.clone().unwrap_or_default()),
        Column::text("send_date", "Sent", |r: &Transaction| format_datetime_opt(r.send_date.as_deref()))
            .sortable(|a, b| a.send_date.cmp(&b.send_date)),
        Column::text("handover", "Handed over by", |r: &Transaction| {
            r.handover_name.clone().unwrap_or_default()
        }),
        Column::text("handover_date", "Handed over", |r: &Transaction| {
            format_datetime_opt(r.handover_date.as_deref())
        }),
    ]
}

fn status_options() -> Vec<(String, String)> {
    TransactionStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let list = PagedList::<Transactions>::new();
    let projects = load_reference::<Projects>();
    let uniforms = load_reference::<Uniforms>();
    let notifier = use_notifier();
    let selected = RwSignal::new(HashSet::<String>::new());
    let creating = RwSignal::new(false);
    let reassigning = RwSignal::new(None::<Transaction>);
    let busy = RwSignal::new(false);
    let exporting = RwSignal::new(false);
    list.reload();

    // A new page or filter starts with an empty selection.
    Effect::new(move |_| {
        list.rows.track();
        selected.set(HashSet::new());
    });

    let selection = RowSelection {
        selected,
        is_selectable: |r: &Transaction| r.status.is_selectable(),
    };

    let eligible = move |action: TransactionAction| -> Vec<i64> {
        let ids: Vec<i64> = selected.with(|s| s.iter().filter_map(|id| id.parse().ok()).collect());
        list.rows.with(|rows| action.eligible_ids(rows, &ids))
    };

    let run_action = move |action: TransactionAction| {
        let ids = untrack(|| eligible(action));
        if ids.is_empty() {
            notifier.warning(format!("No selected transaction can be moved to {}", action.target().label()));
            return;
        }
        let count = ids.len();
        busy.set(true);
        spawn_local(async move {
            match api::apply_action(action, ids).await {
                Ok(result) => {
                    notifier.success(
                        result
                            .message
                            .unwrap_or_else(|| format!("{}: {} transactions", action.label(), count)),
                    );
                    list.reload();
                }
                Err(e) => {
                    log::error!("{:?} failed: {}", action, e);
                    notifier.error(e.to_string());
                }
            }
            busy.set(false);
        });
    };

    let export = move || {
        let filter = list.filter.get_untracked();
        exporting.set(true);
        notifier.info(Transactions::export_notice());
        spawn_local(async move {
            if let Err(e) = export_list::<Transactions>(&filter).await {
                log::error!("transactions export: {}", e);
                notifier.error(e.to_string());
            }
            exporting.set(false);
        });
    };

    let actions: RowActions<Transaction> = Arc::new(move |row: &Transaction| {
        if !row.status.can_reassign() {
            return view! { <span></span> }.into_any();
        }
        let row = row.clone();
        view! {
            <div class="row-actions" on:click=|e| e.stop_propagation()>
                <button
                    class="row-actions__btn"
                    title="Reassign"
                    on:click=move |_| reassigning.set(Some(row.clone()))
                >
                    {icon("repeat")}
                </button>
            </div>
        }
        .into_any()
    });

    let action_button = move |action: TransactionAction, icon_name: &'static str| {
        let count = Signal::derive(move || eligible(action).len());
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| run_action(action)
                disabled=Signal::derive(move || busy.get() || count.get() == 0)
            >
                {icon(icon_name)}
                {move || format!(" {} ({})", action.label(), count.get())}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="a009_transaction--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Transactions"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| creating.set(true))
                create_label="New request"
            >
                {action_button(TransactionAction::Accept, "check")}
                {action_button(TransactionAction::Handover, "send")}
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
                    statuses=status_options()
                    cursor=list.cursor
                    on_page_change=Callback::new(move |p| list.go_to(p))
                />

                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !list.loading.get()
                    fallback=|| view! { <LoadingSpinner caption="Loading transactions..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &Transaction| r.id.to_string()
                        selection=selection
                        actions=actions.clone()
                    />
                </Show>
            </div>

            <Show when=move || creating.get()>
                <TransactionDetails
                    uniforms=uniforms
                    on_saved=Callback::new(move |_| {
                        creating.set(false);
                        list.after_create();
                    })
                    on_cancel=Callback::new(move |_| creating.set(false))
                />
            </Show>
            {move || reassigning.get().map(|row| view! {
                <ReassignDialog
                    transaction=row
                    on_saved=Callback::new(move |_| {
                        reassigning.set(None);
                        list.after_edit();
                    })
                    on_cancel=Callback::new(move |_| reassigning.set(None))
                />
            })}
        </PageFrame>
    }
}
