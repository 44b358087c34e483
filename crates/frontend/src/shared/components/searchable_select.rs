//! Dropdown with a text box that narrows the option list.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Case-insensitive substring match on the label. Blank query keeps all.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn label_of(options: &[SelectOption], value: &str) -> Option<String> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.clone())
}

#[component]
pub fn SearchableSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    /// Selected value, empty when nothing is picked.
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Fired after the user picks an option.
    #[prop(optional)]
    on_select: Option<Callback<String>>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());

    let visible = Signal::derive(move || options.with(|opts| filter_options(opts, &query.get())));
    let selected_label = move || {
        let current = value.get();
        options.with(|opts| label_of(opts, &current)).unwrap_or_default()
    };

    let pick = move |option: SelectOption| {
        value.set(option.value.clone());
        query.set(String::new());
        open.set(false);
        if let Some(cb) = on_select {
            cb.run(option.value);
        }
    };

    view! {
        <div class="searchable-select">
            <input
                type="text"
                class="form__input searchable-select__input"
                placeholder=placeholder
                prop:disabled=move || disabled.get()
                prop:value=move || if open.get() { query.get() } else { selected_label() }
                on:focus=move |_| {
                    query.set(String::new());
                    open.set(true);
                }
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:blur=move |_| {
                    // Let a click on an option land before the list closes.
                    set_timeout(move || open.set(false), std::time::Duration::from_millis(150));
                }
            />
            <Show when=move || open.get()>
                <ul class="searchable-select__list">
                    {move || {
                        let items = visible.get();
                        if items.is_empty() {
                            return view! { <li class="searchable-select__empty">"No matches"</li> }.into_any();
                        }
                        items.into_iter().map(|option| {
                            let is_current = value.with(|v| *v == option.value);
                            let label = option.label.clone();
                            view! {
                                <li
                                    class="searchable-select__option"
                                    class:searchable-select__option--selected=is_current
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick(option.clone());
                                    }
                                >
                                    {label}
                                </li>
                            }
                        }).collect_view().into_any()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "Safety Boots"),
            SelectOption::new(2, "Winter Jacket"),
            SelectOption::new(3, "Boots, rubber"),
        ]
    }

    #[test]
    fn filters_by_label_ignoring_case() {
        let found = filter_options(&options(), "BOOTS");
        let values: Vec<_> = found.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3"]);
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_options(&options(), "  ").len(), 3);
    }

    #[test]
    fn value_is_not_searched() {
        assert!(filter_options(&options(), "2").is_empty());
    }

    #[test]
    fn label_lookup() {
        assert_eq!(label_of(&options(), "2").as_deref(), Some("Winter Jacket"));
        assert_eq!(label_of(&options(), "9"), None);
    }
}
