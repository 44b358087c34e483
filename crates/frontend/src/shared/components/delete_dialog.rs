use super::ConfirmDialog;
use crate::shared::api_utils;
use crate::shared::toast::use_notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Row waiting for delete confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub id: i64,
    pub label: String,
}

/// Confirms and issues `DELETE {endpoint}/{id}` for the pending target.
#[component]
pub fn DeleteDialog(
    target: RwSignal<Option<DeleteTarget>>,
    endpoint: &'static str,
    /// Runs after a successful delete, with the number of removed rows.
    on_deleted: Callback<usize>,
) -> impl IntoView {
    let notifier = use_notifier();
    let busy = RwSignal::new(false);

    let confirm = move || {
        let Some(pending) = target.get_untracked() else {
            return;
        };
        busy.set(true);
        spawn_local(async move {
            let path = format!("{}/{}", endpoint, pending.id);
            match api_utils::delete(&path).await {
                Ok(_) => {
                    log::info!("deleted {}", path);
                    notifier.success(format!("{} deleted", pending.label));
                    target.set(None);
                    on_deleted.run(1);
                }
                Err(e) => {
                    log::error!("delete {} failed: {}", path, e);
                    notifier.error(e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        {move || target.get().map(|pending| view! {
            <ConfirmDialog
                title="Delete record"
                message=format!("Delete {}? This cannot be undone.", pending.label)
                busy=busy
                on_confirm=Callback::new(move |_| confirm())
                on_cancel=Callback::new(move |_| target.set(None))
            />
        })}
    }
}
