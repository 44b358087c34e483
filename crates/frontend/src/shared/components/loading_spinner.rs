use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] caption: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <Spinner />
            <span class="loading-spinner__caption">
                {caption.unwrap_or_else(|| "Loading...".to_string())}
            </span>
        </div>
    }
}
