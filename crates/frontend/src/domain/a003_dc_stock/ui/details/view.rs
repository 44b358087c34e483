use crate::domain::a002_uniform::ui::picker::UniformPicker;
use crate::shared::api_utils;
use crate::shared::components::table::format_money_opt;
use crate::shared::components::{FieldGroup, FormField, ReadonlyField};
use crate::shared::form_editor::FormEditor;
use crate::shared::modal::{form_footer, Modal};
use contracts::domain::a002_uniform::aggregate::Uniform;
use contracts::domain::a003_dc_stock::aggregate::{DcStockForm, DcStocks};
use contracts::shared::form::{display_opt, parse_amount, parse_count};
use contracts::shared::ListResource;
use leptos::prelude::*;

#[component]
pub fn DcStockDetails(
    form: DcStockForm,
    uniforms: RwSignal<Vec<Uniform>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = form.is_edit();
    let initial_uniform = form.uniform_id;
    let initial_count = display_opt(form.stock_count());
    let initial_price = display_opt(form.unit_price());
    let editor = FormEditor::new(form);

    let save = move || {
        let id = editor.form.with_untracked(|f| f.id);
        editor.save(
            move |payload| async move {
                match id {
                    Some(id) => api_utils::put_json(&format!("{}/{}", DcStocks::ENDPOINT, id), &payload).await,
                    None => api_utils::post_json(DcStocks::ENDPOINT, &payload).await,
                }
            },
            if is_edit { "Stock updated" } else { "Stock added" },
            on_saved,
        );
    };

    view! {
        <Modal
            title=if is_edit { "Edit DC stock" } else { "New DC stock" }.to_string()
            on_close=on_cancel
            footer=form_footer(editor.saving, "Save", on_cancel, Callback::new(move |_| save()))
        >
            {move || editor.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FieldGroup label="Uniform">
                <UniformPicker
                    uniforms=uniforms
                    initial=initial_uniform
                    on_select=Callback::new(move |id| editor.update(|f| f.uniform_id = id))
                />
            </FieldGroup>
            <FormField
                label="Stock count"
                initial=initial_count
                numeric=true
                on_input=Callback::new(move |v: String| editor.update(|f| f.set_stock_count(parse_count(&v))))
            />
            <FormField
                label="Unit price"
                initial=initial_price
                numeric=true
                on_input=Callback::new(move |v: String| editor.update(|f| f.set_unit_price(parse_amount(&v))))
            />
            <ReadonlyField
                label="Total price"
                value=Signal::derive(move || editor.form.with(|f| format_money_opt(f.total_price())))
            />
        </Modal>
    }
}
