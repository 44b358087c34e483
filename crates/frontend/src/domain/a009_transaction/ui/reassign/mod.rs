//! Moves a pending transaction to another employee.

use crate::domain::a001_employee::ui::picker::BadgeLookup;
use crate::domain::a009_transaction::api;
use crate::shared::components::{FieldGroup, ReadonlyField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a009_transaction::aggregate::{ReassignForm, Transaction};
use leptos::prelude::*;

#[component]
pub fn ReassignDialog(
    transaction: Transaction,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editor = FormEditor::new(ReassignForm::for_transaction(&transaction));
    let current = format!("{} ({})", transaction.full_name, transaction.badge);
    let summary = format!("{} × {}", transaction.uniform_name, transaction.count);

    let save = move || editor.save(api::reassign, "Transaction reassigned", on_saved);

    view! {
        <Modal
            title="Reassign transaction".to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Reassign", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <ReadonlyField label="Current employee" value=Signal::derive(move || current.clone()) />
            <ReadonlyField label="Uniform" value=Signal::derive(move || summary.clone()) />
            <FieldGroup label="New employee badge">
                <BadgeLookup on_change=Callback::new(move |employee| editor.update(|f| f.employee = employee)) />
            </FieldGroup>
            {move || {
                editor.form.with(|f| f.employee.as_ref().map(|e| {
                    view! { <div class="form__hint">{format!("{} · {}", e.display_name(), e.position)}</div> }
                }))
            }}
        </Modal>
    }
}
