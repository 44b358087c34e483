//! State and reload logic behind every paginated list page.

use contracts::shared::query::ListFilter;
use contracts::shared::{ListResource, PageCursor};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;

use super::api_utils;

/// Rows, page position and filters of one list page.
///
/// Only the response of the latest request is applied; a slower earlier
/// response is dropped.
pub struct PagedList<R: ListResource> {
    pub rows: RwSignal<Vec<R::Row>>,
    pub cursor: RwSignal<PageCursor>,
    pub filter: RwSignal<ListFilter>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for PagedList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for PagedList<R> {}

impl<R: ListResource> PagedList<R> {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            cursor: RwSignal::new(PageCursor::new(R::PAGE_SIZE)),
            filter: RwSignal::new(ListFilter::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: StoredValue::new(0),
            _resource: PhantomData,
        }
    }

    /// Fetches the current page. When the backend reports fewer pages than
    /// the current one, the page is clamped and fetched again.
    pub fn reload(&self) {
        let this = *self;
        let generation = this.generation.get_value() + 1;
        this.generation.set_value(generation);

        let page = this.cursor.with_untracked(|c| c.page);
        let filter = this.filter.get_untracked();
        this.loading.set(true);
        this.error.set(None);
        log::debug!("{}: loading page {}", R::ENDPOINT, page);

        spawn_local(async move {
            let result = api_utils::fetch_page::<R>(&filter, page).await;
            if this.generation.get_value() != generation {
                return;
            }
            match result {
                Ok(fetched) => {
                    let mut clamped = false;
                    this.cursor.update(|c| clamped = c.apply_total(fetched.total));
                    if clamped {
                        log::debug!("{}: page {} out of range, clamping", R::ENDPOINT, page);
                        this.reload();
                        return;
                    }
                    this.rows.set(fetched.rows);
                }
                Err(e) => {
                    log::error!("{}: failed to load list: {}", R::ENDPOINT, e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn go_to(&self, page: usize) {
        self.cursor.update(|c| c.go_to(page));
        self.reload();
    }

    /// Applies a new filter set and starts over from page 1.
    pub fn apply_filter(&self, filter: ListFilter) {
        self.filter.set(filter);
        self.cursor.update(|c| c.page = 1);
        self.reload();
    }

    pub fn after_create(&self) {
        self.cursor.update(|c| c.after_create());
        self.reload();
    }

    pub fn after_edit(&self) {
        self.reload();
    }

    pub fn after_delete(&self, removed: usize) {
        self.cursor.update(|c| c.after_delete(removed));
        self.reload();
    }

    pub fn total(&self) -> Signal<usize> {
        let cursor = self.cursor;
        Signal::derive(move || cursor.with(|c| c.total))
    }
}

impl<R: ListResource> Default for PagedList<R> {
    fn default() -> Self {
        Self::new()
    }
}
