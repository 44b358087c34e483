use crate::domain::a010_uniform_condition::ui::details::UniformConditionDetails;
use crate::shared::components::table::{format_count, Column, DataTable, RowActions};
use crate::shared::components::{
    DeleteDialog, DeleteTarget, FilterFields, FilterPanel, ListHeader, LoadingSpinner,
    RowActionButtons,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::PagedList;
use crate::shared::reference_data::load_reference;
use contracts::domain::a002_uniform::aggregate::Uniforms;
use contracts::domain::a010_uniform_condition::aggregate::{
    UniformCondition, UniformConditionForm, UniformConditions,
};
use contracts::shared::reference::Positions;
use contracts::shared::ListResource;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<Column<UniformCondition>> {
    vec![
        Column::text("position", "Position", |r: &UniformCondition| r.position.clone())
            .sortable(|a, b| a.position.cmp(&b.position)),
        Column::text("area", "Functional area", |r: &UniformCondition| {
            r.functional_area.clone().unwrap_or_default()
        }),
        Column::text("uniform", "Uniform", |r: &UniformCondition| r.uniform_name.clone())
            .sortable(|a, b| a.uniform_name.cmp(&b.uniform_name)),
        Column::text("gender", "Gender", |r: &UniformCondition| r.gender.clone()),
        Column::text("type", "Type", |r: &UniformCondition| r.uniform_type.clone().unwrap_or_default()),
        Column::text("required", "Required count", |r: &UniformCondition| format_count(r.required_count))
            .right()
            .sortable(|a, b| a.required_count.cmp(&b.required_count)),
    ]
}

#[component]
pub fn UniformConditionList() -> impl IntoView {
    let list = PagedList::<UniformConditions>::new();
    let positions = load_reference::<Positions>();
    let uniforms = load_reference::<Uniforms>();
    let editing = RwSignal::new(None::<UniformConditionForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    list.reload();

    let actions: RowActions<UniformCondition> = Arc::new(move |row: &UniformCondition| {
        let form = UniformConditionForm::from_existing(row);
        let target = DeleteTarget {
            id: row.id,
            label: format!("the {} condition for {}", row.uniform_name, row.position),
        };
        view! {
            <RowActionButtons
                on_edit=Callback::new(move |_| editing.set(Some(form.clone())))
                on_delete=Callback::new(move |_| deleting.set(Some(target.clone())))
            />
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a010_uniform_condition--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Uniform conditions"
                total=list.total()
                loading=list.loading
                on_refresh=Callback::new(move |_| list.reload())
                on_create=Callback::new(move |_| editing.set(Some(UniformConditionForm::default())))
                create_label="New condition"
            />

            <div class="page__content">
                <FilterPanel
                    applied=list.filter
                    on_apply=Callback::new(move |f| list.apply_filter(f))
                    fields=FilterFields { search: true, ..Default::default() }
                    cursor=list.cursor
                    on_page_change=Callback::new(move |p| list.go_to(p))
                />

                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !list.loading.get()
                    fallback=|| view! { <LoadingSpinner caption="Loading conditions..." /> }
                >
                    <DataTable
                        columns=columns()
                        rows=list.rows
                        row_id=|r: &UniformCondition| r.id.to_string()
                        actions=actions.clone()
                    />
                </Show>
            </div>

            {move || editing.get().map(|form| view! {
                <UniformConditionDetails
                    form=form
                    positions=positions
                    uniforms=uniforms
                    on_saved=Callback::new(move |_| {
                        let created = editing.with_untracked(|f| f.as_ref().is_some_and(|f| !f.is_edit()));
                        editing.set(None);
                        if created { list.after_create() } else { list.after_edit() }
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}
            <DeleteDialog
                target=deleting
                endpoint=UniformConditions::ENDPOINT
                on_deleted=Callback::new(move |n| list.after_delete(n))
            />
        </PageFrame>
    }
}
