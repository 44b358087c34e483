use crate::shared::api_utils;
use crate::shared::components::table::format_count;
use crate::shared::components::{DateInput, FieldGroup, FormField, ProjectSelect, ReadonlyField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a006_pallet_counting::aggregate::{PalletCountingForm, PalletCountings};
use contracts::shared::form::{display_opt, parse_count};
use contracts::shared::reference::Project;
use contracts::shared::ListResource;
use leptos::prelude::*;

#[component]
pub fn PalletCountingDetails(
    form: PalletCountingForm,
    projects: RwSignal<Vec<Project>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_project = form.project_id;
    let initial_deposit = display_opt(form.deposit_auto);
    let initial_accepted = display_opt(form.dc_accepted);
    let initial_delivered = display_opt(form.dc_delivered);
    let initial_remainder = display_opt(form.deposit_remainder);
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
                        api_utils::put_json(&format!("{}/{}", PalletCountings::ENDPOINT, id), &payload)
                            .await
                    }
                    None => api_utils::post_json(PalletCountings::ENDPOINT, &payload).await,
                }
            },
            if is_edit { "Count updated" } else { "Count saved" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit pallet count" } else { "New pallet count" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Save", on_cancel, Callback::new(move |_| save()))
            wide=true
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <FieldGroup label="Project">
                    <ProjectSelect
                        projects=projects
                        initial=initial_project
                        on_change=Callback::new(move |id| editor.update(|f| f.project_id = id))
                    />
                </FieldGroup>
                <FieldGroup label="Date">
                    <DateInput value=date />
                </FieldGroup>
            </div>
            <div class="form__row">
                <FormField
                    label="Deposit (auto)"
                    initial=initial_deposit
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.deposit_auto = parse_count(&v)))
                />
                <FormField
                    label="Pallets accepted by DC"
                    initial=initial_accepted
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.dc_accepted = parse_count(&v)))
                />
                <FormField
                    label="Pallets delivered by DC"
                    initial=initial_delivered
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.dc_delivered = parse_count(&v)))
                />
            </div>
            <div class="form__row">
                <ReadonlyField
                    label="Remainder (auto)"
                    value=Signal::derive(move || {
                        editor.form.with(|f| f.auto_remainder().map(format_count).unwrap_or_else(|| "—".to_string()))
                    })
                />
                <FormField
                    label="Deposit pallet remainder"
                    initial=initial_remainder
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.deposit_remainder = parse_count(&v)))
                />
            </div>
        </Modal>
    }
}
