use crate::shared::api_utils;
use crate::shared::components::{DateInput, FieldGroup, FormField, ProjectSelect};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a005_pallet_deposit::aggregate::{PalletDepositForm, PalletDeposits};
use contracts::shared::form::{display_opt, parse_count};
use contracts::shared::reference::Project;
use contracts::shared::ListResource;
use leptos::prelude::*;

#[component]
pub fn PalletDepositDetails(
    form: PalletDepositForm,
    projects: RwSignal<Vec<Project>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_project = form.project_id;
    let initial_count = display_opt(form.deposit_count);
    let date = RwSignal::new(form.date.clone());
    let editor = FormEditor::new(form);

    Effect::new(move |_| {
        let value = date.get();
        editor.update(|f| f.date = value);
    });

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        editor.save(
            move |payload| async move {
                match id {
                    Some(id) => {
                        api_utils::put_json(&format!("{}/{}", PalletDeposits::ENDPOINT, id), &payload)
                            .await
                    }
                    None => api_utils::post_json(PalletDeposits::ENDPOINT, &payload).await,
                }
            },
            if is_edit { "Deposit updated" } else { "Deposit recorded" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit pallet deposit" } else { "New pallet deposit" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Save", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FieldGroup label="Project">
                <ProjectSelect
                    projects=projects
                    initial=initial_project
                    on_change=Callback::new(move |id| editor.update(|f| f.project_id = id))
                />
            </FieldGroup>
            <FormField
                label="Deposit count"
                initial=initial_count
                numeric=true
                on_input=Callback::new(move |v: String| editor.update(|f| f.deposit_count = parse_count(&v)))
            />
            <FieldGroup label="Date">
                <DateInput value=date />
            </FieldGroup>
        </Modal>
    }
}
