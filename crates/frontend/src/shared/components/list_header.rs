use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// `page__header` of a list page: title, record count, create and refresh.
/// Extra buttons go in `children`.
#[component]
pub fn ListHeader(
    title: &'static str,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)] on_create: Option<Callback<()>>,
    #[prop(optional)] create_label: &'static str,
    #[prop(optional, into)] create_disabled: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || total.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                {on_create.map(|on_create| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_create.run(())
                        disabled=create_disabled
                    >
                        {icon("plus")}
                        {format!(" {}", if create_label.is_empty() { "New" } else { create_label })}
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>
        </div>
    }
}
