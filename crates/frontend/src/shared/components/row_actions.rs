use crate::shared::icons::icon;
use leptos::prelude::*;

/// Edit / delete buttons of a table row.
#[component]
pub fn RowActionButtons(
    on_edit: Callback<()>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="row-actions" on:click=|e| e.stop_propagation()>
            <button class="row-actions__btn" title="Edit" on:click=move |_| on_edit.run(())>
                {icon("edit")}
            </button>
            {on_delete.map(|on_delete| view! {
                <button
                    class="row-actions__btn row-actions__btn--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(())
                >
                    {icon("trash")}
                </button>
            })}
        </div>
    }
}
