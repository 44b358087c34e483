//! Thumbnail cell for stored upload references.

use crate::shared::api_utils::api_base;
use contracts::shared::uploads::resolve_upload_url;
use leptos::prelude::*;

/// Renders the picture behind `stored`, or a dash when nothing is stored.
pub fn image_cell(stored: Option<&str>, alt: &str) -> AnyView {
    match stored.and_then(|s| resolve_upload_url(&api_base(), s)) {
        Some(url) => {
            let href = url.clone();
            view! {
                <a href=href target="_blank" rel="noopener">
                    <img class="table__thumb" src=url alt=alt.to_string() loading="lazy" />
                </a>
            }
            .into_any()
        }
        None => view! { <span class="table__muted">"—"</span> }.into_any(),
    }
}
