//! "Select all" box in a table header.

use crate::shared::list_utils::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Three-state header checkbox. The indeterminate look can only be set
/// through the DOM property, so it is applied from an effect.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<HeaderCheckState>,
    /// `true` = check every selectable row, `false` = clear them.
    on_change: Callback<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let indeterminate = state.get() == HeaderCheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
