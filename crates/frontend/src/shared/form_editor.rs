//! State behind a create/edit modal.

use contracts::shared::errors::RequestError;
use contracts::shared::form::{submit_with, FormModel};
use contracts::shared::mutation::MutationResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::toast::{use_notifier, Notifier};

/// Form model in a signal plus the submit state of the modal.
///
/// Validation failures are shown as a warning toast and never reach the
/// network. A failed request keeps the modal open with the error inline.
pub struct FormEditor<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    notifier: Notifier,
}

impl<F: Send + Sync + 'static> Clone for FormEditor<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormEditor<F> {}

impl<F> FormEditor<F>
where
    F: FormModel + Clone + Send + Sync + 'static,
{
    pub fn new(form: F) -> Self {
        Self {
            form: RwSignal::new(form),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            notifier: use_notifier(),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut F)) {
        self.form.update(f);
    }

    /// Validates and sends once. `on_saved` runs after a successful response.
    pub fn save<Fut>(
        &self,
        send: impl FnOnce(F::Payload) -> Fut,
        success_text: &'static str,
        on_saved: Callback<()>,
    ) where
        Fut: Future<Output = Result<MutationResult, RequestError>> + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        let request = match submit_with(&current, send) {
            Ok(request) => request,
            Err(invalid) => {
                self.notifier.warning(invalid.to_string());
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match request.await {
                Ok(result) => {
                    log::info!("saved: {}", success_text);
                    this.saving.set(false);
                    this.notifier
                        .success(result.message.unwrap_or_else(|| success_text.to_string()));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("save failed: {}", e);
                    this.saving.set(false);
                    this.error.set(Some(e.to_string()));
                    this.notifier.error(e.to_string());
                }
            }
        });
    }
}
