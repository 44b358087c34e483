//! Transient notifications.
//!
//! [`Notifier`] is a thin handle over thaw's `ToasterInjection`; the
//! `ToasterProvider` mounted in `App` renders the stack. Messages disappear
//! after `AppConfig::toast_timeout_ms`.

use std::time::Duration;

use leptos::prelude::*;
use thaw::*;

use super::config::config;

#[derive(Clone, Copy)]
pub struct Notifier {
    toaster: ToasterInjection,
}

impl Notifier {
    pub fn new(toaster: ToasterInjection) -> Self {
        Self { toaster }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastIntent::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastIntent::Error, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(ToastIntent::Warning, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastIntent::Info, text.into());
    }

    pub fn push(&self, intent: ToastIntent, text: String) {
        let options = ToastOptions::default()
            .with_intent(intent)
            .with_timeout(dismiss_after(config().toast_timeout_ms));

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastBody>{text}</ToastBody>
                    </Toast>
                }
            },
            options,
        );
    }
}

fn dismiss_after(timeout_ms: u32) -> Duration {
    Duration::from_millis(u64::from(timeout_ms))
}

/// Must be called under `ToasterProvider`.
pub fn use_notifier() -> Notifier {
    Notifier::new(ToasterInjection::expect_context())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_delay_follows_configured_milliseconds() {
        assert_eq!(dismiss_after(4_000), Duration::from_secs(4));
        assert_eq!(dismiss_after(250), Duration::from_millis(250));
    }
}
