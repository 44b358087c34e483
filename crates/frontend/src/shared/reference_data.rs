//! Dropdown data loaded once per page or modal.

use contracts::shared::reference::ReferenceResource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api_utils;

/// Starts loading `R` and returns the signal the rows land in. Failures are
/// logged and leave the list empty.
pub fn load_reference<R: ReferenceResource>() -> RwSignal<Vec<R::Row>> {
    let rows = RwSignal::new(Vec::new());
    spawn_local(async move {
        match api_utils::fetch_reference::<R>().await {
            Ok(data) => rows.set(data),
            Err(e) => log::error!("failed to load {}: {}", R::ENDPOINT, e),
        }
    });
    rows
}
