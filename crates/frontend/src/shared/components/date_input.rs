use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string, empty when unset.
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Latest selectable day, `YYYY-MM-DD`.
    #[prop(optional, into)]
    max: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            max=max
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
