//! Login page component
//!
//! A standalone page for signing in, redirects to the dashboard on success.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{LoginForm, use_session_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();

    // Redirect if already signed in
    Effect::new(move |_| {
        if session.is_signed_in() {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    let on_register_click = move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    };

    view! {
        <Title text="Sign In - DocBoard" />
        <main class="min-h-[calc(100vh-4rem)] bg-gray-50 flex items-center justify-center px-4 py-12">
            <LoginForm on_success=on_success on_register_click=on_register_click />
        </main>
    }
}
