use crate::shared::components::{SearchableSelect, SelectOption};
use contracts::domain::a002_uniform::aggregate::Uniform;
use leptos::prelude::*;

pub fn uniform_options(uniforms: &[Uniform]) -> Vec<SelectOption> {
    uniforms
        .iter()
        .map(|u| SelectOption::new(u.id, u.label()))
        .collect()
}

/// Searchable uniform dropdown. Reports the picked id.
#[component]
pub fn UniformPicker(
    uniforms: RwSignal<Vec<Uniform>>,
    on_select: Callback<Option<i64>>,
    #[prop(default = None)] initial: Option<i64>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let value = RwSignal::new(initial.map(|id| id.to_string()).unwrap_or_default());
    let options = Signal::derive(move || uniforms.with(|u| uniform_options(u)));

    view! {
        <SearchableSelect
            options=options
            value=value
            placeholder="Search uniform..."
            disabled=disabled
            on_select=Callback::new(move |picked: String| on_select.run(picked.parse().ok()))
        />
    }
}
