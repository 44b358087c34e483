use leptos::prelude::*;
use std::cell::Cell;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

thread_local! {
    // Lets the HTTP layer end the session from outside the component tree.
    static SESSION_WRITER: Cell<Option<WriteSignal<AuthState>>> = const { Cell::new(None) };
}

/// Restores the token saved by a previous login and provides the auth signals.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
        display_name: None,
    });

    SESSION_WRITER.with(|w| w.set(Some(set_auth_state)));

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String, display_name: Option<String>) {
    storage::save_token(&token);
    set_auth_state.set(AuthState {
        token: Some(token),
        display_name,
    });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}

/// Called by the HTTP layer on a 401. Drops the token and returns to the login page.
pub fn expire_session() {
    storage::clear_token();
    if let Some(writer) = SESSION_WRITER.with(|w| w.get()) {
        log::warn!("session expired, signing out");
        writer.set(AuthState::default());
    }
}
