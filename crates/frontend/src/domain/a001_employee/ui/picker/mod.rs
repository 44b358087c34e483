//! Badge autocomplete.

use crate::domain::a001_employee::api;
use contracts::domain::a001_employee::aggregate::{Employee, BADGE_LOOKUP_MIN_CHARS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// A prefilled badge stands for the stored pick, so editing it must clear it.
fn starts_picked(initial: &str) -> bool {
    !initial.trim().is_empty()
}

/// Text box that looks employees up by badge while typing.
///
/// Keystrokes are debounced; each lookup carries a generation number and
/// only the latest one may update the suggestions. Editing the text after a
/// pick clears the selection.
#[component]
pub fn BadgeLookup(
    /// Called with the picked employee, or `None` when the pick is cleared.
    on_change: Callback<Option<Employee>>,
    #[prop(optional, into)] initial: String,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let picked = RwSignal::new(starts_picked(&initial));
    let text = RwSignal::new(initial);
    let suggestions = RwSignal::new(Vec::<Employee>::new());
    let searching = RwSignal::new(false);
    let generation = StoredValue::new(0_u64);

    let lookup = move |badge: String| {
        let current = generation.get_value() + 1;
        generation.set_value(current);
        if badge.trim().chars().count() < BADGE_LOOKUP_MIN_CHARS {
            suggestions.set(Vec::new());
            searching.set(false);
            return;
        }
        searching.set(true);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() != current {
                return;
            }
            let result = api::search_by_badge(&badge).await;
            if generation.get_value() != current {
                return;
            }
            match result {
                Ok(found) => suggestions.set(found),
                Err(e) => {
                    log::error!("badge lookup failed: {}", e);
                    suggestions.set(Vec::new());
                }
            }
            searching.set(false);
        });
    };

    let pick = move |employee: Employee| {
        generation.update_value(|g| *g += 1);
        text.set(employee.display_name());
        suggestions.set(Vec::new());
        searching.set(false);
        picked.set(true);
        on_change.run(Some(employee));
    };

    view! {
        <div class="badge-lookup">
            <input
                type="text"
                class="form__input"
                placeholder="Type a badge number"
                prop:value=move || text.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    text.set(value.clone());
                    if picked.get_untracked() {
                        picked.set(false);
                        on_change.run(None);
                    }
                    lookup(value);
                }
            />
            <Show when=move || searching.get()>
                <div class="badge-lookup__hint">"Searching..."</div>
            </Show>
            <Show when=move || !suggestions.with(|s| s.is_empty())>
                <ul class="searchable-select__list">
                    {move || suggestions.get().into_iter().map(|employee| {
                        let title = employee.display_name();
                        let details = [employee.position.clone(), employee.sizes_summary()]
                            .into_iter()
                            .filter(|s| !s.is_empty())
                            .collect::<Vec<_>>()
                            .join(" · ");
                        view! {
                            <li
                                class="searchable-select__option"
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    pick(employee.clone());
                                }
                            >
                                <div>{title}</div>
                                <div class="searchable-select__details">{details}</div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_badge_counts_as_a_pick() {
        assert!(starts_picked("B-1042"));
        assert!(!starts_picked(""));
        assert!(!starts_picked("   "));
    }
}
