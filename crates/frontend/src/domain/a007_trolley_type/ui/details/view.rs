use crate::domain::a007_trolley_type::api;
use crate::shared::components::table::image_cell;
use crate::shared::components::{FieldGroup, FormField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a007_trolley_type::aggregate::TrolleyTypeForm;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::File;

#[component]
pub fn TrolleyTypeDetails(
    form: TrolleyTypeForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_name = form.name.clone();
    let initial_description = form.description.clone();
    let existing_image = form.existing_image.clone();
    let editor = FormEditor::new(form);
    let picked = StoredValue::new_local(None::<File>);

    let on_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let name = file.as_ref().map(|f| f.name());
        picked.set_value(file);
        editor.update(|f| f.image_name = name);
    };

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        let image = picked.get_value();
        editor.save(
            move |meta| api::save(id, meta, image),
            if is_edit { "Trolley type updated" } else { "Trolley type created" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit trolley type" } else { "New trolley type" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Save", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FormField
                label="Name"
                initial=initial_name
                on_input=Callback::new(move |v: String| editor.update(|f| f.name = v))
            />
            <FormField
                label="Description"
                initial=initial_description
                on_input=Callback::new(move |v: String| editor.update(|f| f.description = v))
            />
            <FieldGroup label="Image">
                <input class="form__file" type="file" accept="image/*" on:change=on_file />
                <div class="form__hint">
                    {move || {
                        editor.form.with(|f| match &f.image_name {
                            Some(name) => format!("Selected: {}", name),
                            None if is_edit => "Leave empty to keep the current picture".to_string(),
                            None => "A picture is required".to_string(),
                        })
                    }}
                </div>
                {existing_image.map(|stored| view! {
                    <div class="form__preview">{image_cell(Some(&stored), "Current picture")}</div>
                })}
            </FieldGroup>
        </Modal>
    }
}
