use crate::domain::a002_uniform::ui::picker::UniformPicker;
use crate::shared::api_utils;
use crate::shared::components::{FieldGroup, FormField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a002_uniform::aggregate::Uniform;
use contracts::domain::a010_uniform_condition::aggregate::{
    UniformConditionForm, UniformConditions,
};
use contracts::shared::form::{display_opt, parse_count};
use contracts::shared::reference::{Position, GENDERS};
use contracts::shared::ListResource;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UniformConditionDetails(
    form: UniformConditionForm,
    positions: RwSignal<Vec<Position>>,
    uniforms: RwSignal<Vec<Uniform>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_area = form.functional_area.clone();
    let initial_uniform = form.uniform_id;
    let initial_count = display_opt(form.required_count);
    let position = RwSignal::new(form.position.clone());
    let gender = RwSignal::new(form.gender.clone());
    let editor = FormEditor::new(form);

    Effect::new(move |_| {
        let value = position.get();
        editor.update(|f| f.position = value);
    });
    Effect::new(move |_| {
        let value = gender.get();
        editor.update(|f| f.gender = value);
    });

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        editor.save(
            move |payload| async move {
                match id {
                    Some(id) => {
                        api_utils::put_json(&format!("{}/{}", UniformConditions::ENDPOINT, id), &payload)
                            .await
                    }
                    None => api_utils::post_json(UniformConditions::ENDPOINT, &payload).await,
                }
            },
            if is_edit { "Condition updated" } else { "Condition created" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit uniform condition" } else { "New uniform condition" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Save", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FieldGroup label="Position">
                <Select value=position>
                    <option value="">"Select position"</option>
                    {move || {
                        positions
                            .get()
                            .into_iter()
                            .map(|p| {
                                let selected = p.name == position.get_untracked();
                                let value = p.name.clone();
                                let label = p.name;
                                view! { <option value=value selected=selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
            </FieldGroup>
            <FormField
                label="Functional area"
                initial=initial_area
                placeholder="Optional"
                on_input=Callback::new(move |v: String| editor.update(|f| f.functional_area = v))
            />
            <FieldGroup label="Uniform">
                <UniformPicker
                    uniforms=uniforms
                    initial=initial_uniform
                    on_select=Callback::new(move |id| editor.update(|f| f.uniform_id = id))
                />
            </FieldGroup>
            <div class="form__row">
                <FieldGroup label="Gender">
                    <Select value=gender>
                        <option value="">"Select gender"</option>
                        {GENDERS
                            .iter()
                            .map(|g| view! { <option value=*g>{*g}</option> })
                            .collect_view()}
                    </Select>
                </FieldGroup>
                <FormField
                    label="Required count"
                    initial=initial_count
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.required_count = parse_count(&v)))
                />
            </div>
        </Modal>
    }
}
