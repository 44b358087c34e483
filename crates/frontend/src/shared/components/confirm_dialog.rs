use crate::shared::modal::Modal;
use leptos::children::ToChildren;
use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation, used before deletes.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=ChildrenFn::to_children(move || {
                let confirm_label = confirm_label.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=busy
                    >
                        {move || if busy.get() { "Working...".to_string() } else { confirm_label.clone() }}
                    </Button>
                }
            })
        >
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
