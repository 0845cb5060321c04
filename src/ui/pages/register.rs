//! Register page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{RegisterForm, use_session_context};

/// Register page component, redirects to the dashboard on success
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session_context();

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

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <Title text="Sign Up - DocBoard" />
        <main class="min-h-[calc(100vh-4rem)] bg-gray-50 flex items-center justify-center px-4 py-12">
            <RegisterForm on_success=on_success on_login_click=on_login_click />
        </main>
    }
}
