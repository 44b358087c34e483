use crate::shared::icons::icon;
use contracts::shared::PageCursor;
use leptos::prelude::*;

/// Pager for a fixed page size. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] cursor: Signal<PageCursor>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let page = move || cursor.with(|c| c.page);
    let last = move || cursor.with(|c| c.total_pages());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !cursor.with(|c| c.has_prev())
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page().saturating_sub(1).max(1))
                disabled=move || !cursor.with(|c| c.has_prev())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", page(), last())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page() + 1)
                disabled=move || !cursor.with(|c| c.has_next())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || !cursor.with(|c| c.has_next())
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-range">{move || cursor.with(|c| c.range_label())}</span>
        </div>
    }
}
