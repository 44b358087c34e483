use crate::shared::api_utils;
use crate::shared::components::table::format_count;
use crate::shared::components::{
    FieldGroup, FormField, ProjectSelect, ReadonlyField, SearchableSelect, SelectOption,
};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a007_trolley_type::aggregate::TrolleyType;
use contracts::domain::a008_trolley::aggregate::{TrolleyForm, Trolleys};
use contracts::shared::form::{display_opt, parse_count};
use contracts::shared::reference::Project;
use contracts::shared::ListResource;
use leptos::prelude::*;

#[component]
pub fn TrolleyDetails(
    form: TrolleyForm,
    projects: RwSignal<Vec<Project>>,
    trolley_types: RwSignal<Vec<TrolleyType>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_project = form.project_id;
    let initial_working = display_opt(form.working_count);
    let initial_broken = display_opt(form.broken_count);
    let type_value = RwSignal::new(form.trolley_type_id.map(|id| id.to_string()).unwrap_or_default());
    let editor = FormEditor::new(form);

    let type_options = Signal::derive(move || {
        trolley_types.with(|types| {
            types
                .iter()
                .map(|t| SelectOption::new(t.id, t.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let total = Signal::derive(move || {
        editor.form.with(|f| match (f.working_count, f.broken_count) {
            (Some(w), Some(b)) => format_count(w + b),
            _ => "—".to_string(),
        })
    });

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        editor.save(
            move |payload| async move {
                match id {
                    Some(id) => {
                        api_utils::put_json(&format!("{}/{}", Trolleys::ENDPOINT, id), &payload).await
                    }
                    None => api_utils::post_json(Trolleys::ENDPOINT, &payload).await,
                }
            },
            if is_edit { "Trolley updated" } else { "Trolley recorded" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit trolleys" } else { "New trolley count" }.to_string()
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
            <FieldGroup label="Trolley type">
                <SearchableSelect
                    options=type_options
                    value=type_value
                    placeholder="Search trolley type..."
                    on_select=Callback::new(move |picked: String| {
                        editor.update(|f| f.trolley_type_id = picked.parse().ok())
                    })
                />
            </FieldGroup>
            <div class="form__row">
                <FormField
                    label="Working"
                    initial=initial_working
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.working_count = parse_count(&v)))
                />
                <FormField
                    label="Broken"
                    initial=initial_broken
                    numeric=true
                    on_input=Callback::new(move |v: String| editor.update(|f| f.broken_count = parse_count(&v)))
                />
                <ReadonlyField label="Total" value=total />
            </div>
        </Modal>
    }
}
