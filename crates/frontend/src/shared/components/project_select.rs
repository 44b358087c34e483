use contracts::shared::reference::Project;
use leptos::prelude::*;

/// Native select over the project list.
#[component]
pub fn ProjectSelect(
    projects: RwSignal<Vec<Project>>,
    on_change: Callback<Option<i64>>,
    #[prop(default = None)] initial: Option<i64>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let selected = RwSignal::new(initial);

    view! {
        <select
            class="form__select"
            prop:disabled=move || disabled.get()
            on:change=move |ev| {
                let id = event_target_value(&ev).parse::<i64>().ok();
                selected.set(id);
                on_change.run(id);
            }
        >
            <option value="" selected=move || selected.get().is_none()>"Select project"</option>
            {move || projects.get().into_iter().map(|p| {
                let id = p.id;
                view! {
                    <option value=id.to_string() selected=move || selected.get() == Some(id)>
                        {p.name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
