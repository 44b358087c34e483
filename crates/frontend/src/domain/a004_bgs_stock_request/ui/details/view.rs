use crate::domain::a001_employee::ui::picker::BadgeLookup;
use crate::domain::a002_uniform::ui::picker::UniformPicker;
use crate::domain::a003_dc_stock::api::fetch_available;
use crate::shared::api_utils;
use crate::shared::components::table::{format_count, format_money_opt};
use crate::shared::components::{FieldGroup, FormField, ProjectSelect, ReadonlyField};
use crate::shared::config::config;
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a002_uniform::aggregate::Uniform;
use contracts::domain::a004_bgs_stock_request::aggregate::{
    BgsStockRequestForm, BgsStockRequests, RequesterType,
};
use contracts::shared::form::{display_opt, parse_count};
use contracts::shared::reference::Project;
use contracts::shared::ListResource;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BgsStockRequestDetails(
    form: BgsStockRequestForm,
    uniforms: RwSignal<Vec<Uniform>>,
    projects: RwSignal<Vec<Project>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_uniform = form.uniform_id;
    let initial_project = form.project_id;
    let initial_badge = StoredValue::new(form.badge.clone());
    let initial_count = display_opt(form.request_count());
    let editor = FormEditor::new(form);
    let stock_loading = RwSignal::new(false);

    let pick_uniform = move |uniform_id: Option<i64>| {
        editor.update(|f| f.set_uniform(uniform_id));
        let Some(uniform_id) = uniform_id else {
            return;
        };
        stock_loading.set(true);
        spawn_local(async move {
            match fetch_available(uniform_id).await {
                Ok(stock) => {
                    // The user may have switched uniform meanwhile.
                    if editor.form.with_untracked(|f| f.uniform_id) == Some(uniform_id) {
                        editor.update(|f| f.set_available(stock));
                    }
                }
                Err(e) => {
                    log::error!("available stock for uniform {}: {}", uniform_id, e);
                    editor.error.set(Some(e.to_string()));
                }
            }
            stock_loading.set(false);
        });
    };

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        editor.save(
            move |payload| async move {
                match id {
                    Some(id) => {
                        api_utils::put_json(&format!("{}/{}", BgsStockRequests::ENDPOINT, id), &payload)
                            .await
                    }
                    None => {
                        api_utils::post_json_with_timeout(
                            BgsStockRequests::ENDPOINT,
                            &payload,
                            config().request_timeout_ms,
                        )
                        .await
                    }
                }
            },
            if is_edit { "Request updated" } else { "Request created" },
            on_saved,
        );
    };

    let is_employee = move || editor.form.with(|f| f.requester_type == RequesterType::Employee);

    view! {
        <Modal
            title=if is_edit { "Edit BGS stock request" } else { "New BGS stock request" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Submit", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FieldGroup label="Uniform">
                <UniformPicker
                    uniforms=uniforms
                    initial=initial_uniform
                    on_select=Callback::new(pick_uniform)
                />
            </FieldGroup>
            <ReadonlyField
                label="Available in DC"
                value=Signal::derive(move || {
                    if stock_loading.get() {
                        return "Checking...".to_string();
                    }
                    editor.form.with(|f| f.available().map(format_count).unwrap_or_else(|| "—".to_string()))
                })
            />
            <FieldGroup label="Requested for">
                <div class="form__radio-group">
                    {RequesterType::all().into_iter().map(|kind| view! {
                        <label class="form__radio">
                            <input
                                type="radio"
                                name="requester-type"
                                prop:checked=move || editor.form.with(|f| f.requester_type == kind)
                                on:change=move |_| editor.update(|f| f.requester_type = kind)
                            />
                            {kind.as_str()}
                        </label>
                    }).collect_view()}
                </div>
            </FieldGroup>
            <FieldGroup label="Project">
                <ProjectSelect
                    projects=projects
                    initial=initial_project
                    on_change=Callback::new(move |id| editor.update(|f| f.project_id = id))
                />
            </FieldGroup>
            <Show when=is_employee>
                <FieldGroup label="Employee badge">
                    <BadgeLookup
                        initial=initial_badge.get_value()
                        on_change=Callback::new(move |employee: Option<Employee>| {
                            editor.update(|f| f.badge = employee.map(|e| e.badge).unwrap_or_default())
                        })
                    />
                </FieldGroup>
            </Show>
            <FormField
                label="Request count"
                initial=initial_count
                numeric=true
                on_input=Callback::new(move |v: String| editor.update(|f| f.set_request_count(parse_count(&v))))
            />
            {move || editor.form.with(|f| f.warning().map(|w| view! {
                <div class="alert alert--warning">{w.to_string()}</div>
            }))}
            <ReadonlyField
                label="Unit price"
                value=Signal::derive(move || editor.form.with(|f| format_money_opt(f.unit_price())))
            />
            <ReadonlyField
                label="Total price"
                value=Signal::derive(move || editor.form.with(|f| format_money_opt(f.total_price())))
            />
        </Modal>
    }
}
