//! Labelled inputs used by the create/edit modals.

use leptos::prelude::*;

/// Text or number input. Keeps its own raw text so partial input such as
/// `"1,"` is not reformatted while typing.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional, into)] initial: String,
    on_input: Callback<String>,
    #[prop(optional)] numeric: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let raw = RwSignal::new(initial);

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input"
                inputmode=if numeric { "decimal" } else { "text" }
                placeholder=placeholder
                prop:value=move || raw.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    raw.set(value.clone());
                    on_input.run(value);
                }
            />
        </div>
    }
}

/// Derived value shown next to the inputs.
#[component]
pub fn ReadonlyField(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="form__readonly">{move || value.get()}</div>
        </div>
    }
}

/// Label wrapper for custom controls (selects, date pickers).
#[component]
pub fn FieldGroup(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {children()}
        </div>
    }
}
