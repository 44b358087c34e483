use crate::shared::icons::icon;
use leptos::children::ToChildren;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Overlay dialog used by every create/edit/delete form.
///
/// Escape, the close button and a click on the overlay all call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Buttons rendered in the footer (Cancel, Save, ...).
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                class:modal--wide=wide
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
            </div>
        </div>
    }
}

/// Cancel + primary button footer of a form modal.
pub fn form_footer(
    saving: RwSignal<bool>,
    save_label: &'static str,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> ChildrenFn {
    ChildrenFn::to_children(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_cancel.run(())
                disabled=Signal::derive(move || saving.get())
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_save.run(())
                disabled=Signal::derive(move || saving.get())
            >
                {move || if saving.get() { "Saving..." } else { save_label }}
            </Button>
        }
    })
}
