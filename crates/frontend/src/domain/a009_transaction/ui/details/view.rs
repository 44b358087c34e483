use crate::domain::a001_employee::ui::picker::BadgeLookup;
use crate::domain::a002_uniform::ui::picker::UniformPicker;
use crate::domain::a010_uniform_condition::api as conditions_api;
use crate::shared::api_utils;
use crate::shared::components::{FieldGroup, FormField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a002_uniform::aggregate::Uniform;
use contracts::domain::a009_transaction::aggregate::{TransactionForm, Transactions};
use contracts::domain::a010_uniform_condition::aggregate::allowed_count;
use contracts::shared::form::parse_count;
use contracts::shared::ListResource;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
enum Allowance {
    Unknown,
    Checking,
    Known(Option<i64>),
    Failed(String),
}

/// Uniform request for one employee. The count is capped by the
/// employee's entitlement for the picked uniform.
#[component]
pub fn TransactionDetails(
    uniforms: RwSignal<Vec<Uniform>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editor = FormEditor::new(TransactionForm::default());
    let allowance = RwSignal::new(Allowance::Unknown);

    let refresh_allowance = move || {
        let Some((employee, uniform_id)) = editor
            .form
            .with_untracked(|f| f.employee.clone().zip(f.uniform_id))
        else {
            allowance.set(Allowance::Unknown);
            return;
        };
        allowance.set(Allowance::Checking);
        spawn_local(async move {
            let result = conditions_api::fetch_for_position(&employee.position).await;
            // The employee or uniform may have changed while waiting.
            let still_current = editor.form.with_untracked(|f| {
                f.uniform_id == Some(uniform_id)
                    && f.employee.as_ref().map(|e| e.id) == Some(employee.id)
            });
            if !still_current {
                return;
            }
            match result {
                Ok(conditions) => {
                    let limit = allowed_count(&conditions, uniform_id, &employee.gender);
                    editor.update(|f| f.max_allowed = limit);
                    allowance.set(Allowance::Known(limit));
                }
                Err(e) => {
                    log::error!("uniform conditions for {}: {}", employee.position, e);
                    allowance.set(Allowance::Failed(e.to_string()));
                }
            }
        });
    };

    let save = move || {
        editor.save(
            |payload| async move { api_utils::post_json(Transactions::ENDPOINT, &payload).await },
            "Request created",
            on_saved,
        );
    };

    let over_limit = move || {
        editor.form.with(|f| match (f.count, f.max_allowed) {
            (Some(count), Some(limit)) => count > limit,
            _ => false,
        })
    };

    view! {
        <Modal
            title="New uniform request".to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Create", on_cancel, Callback::new(move |_| save()))
            wide=true
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FieldGroup label="Employee badge">
                <BadgeLookup on_change=Callback::new(move |employee| {
                    editor.update(|f| f.set_employee(employee));
                    refresh_allowance();
                }) />
            </FieldGroup>
            {move || {
                editor.form.with(|f| f.employee.as_ref().map(|e| {
                    view! {
                        <div class="form__hint">
                            {format!("{} · {} · {}", e.display_name(), e.position, e.gender)}
                            <br />
                            {e.sizes_summary()}
                        </div>
                    }
                }))
            }}
            <FieldGroup label="Uniform">
                <UniformPicker
                    uniforms=uniforms
                    on_select=Callback::new(move |id| {
                        editor.update(|f| f.set_uniform(id));
                        refresh_allowance();
                    })
                />
            </FieldGroup>
            <FormField
                label="Count"
                numeric=true
                on_input=Callback::new(move |v: String| editor.update(|f| f.count = parse_count(&v)))
            />
            <div class="form__hint">
                {move || match allowance.get() {
                    Allowance::Unknown => "Pick an employee and a uniform to see the allowance".to_string(),
                    Allowance::Checking => "Checking allowance...".to_string(),
                    Allowance::Known(Some(limit)) => format!("Allowed: {}", limit),
                    Allowance::Known(None) => "No uniform condition covers this employee and uniform".to_string(),
                    Allowance::Failed(e) => format!("Allowance unavailable: {}", e),
                }}
            </div>
            <Show when=over_limit>
                <div class="alert alert--warning">"The count exceeds the employee's allowance"</div>
            </Show>
        </Modal>
    }
}
