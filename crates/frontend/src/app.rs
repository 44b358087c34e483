use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::{ToastPosition, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <ToasterProvider position=ToastPosition::BottomEnd>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ToasterProvider>
    }
}
