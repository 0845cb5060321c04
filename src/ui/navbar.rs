//! Top navigation bar
//!
//! Shows the sign-in state from the session context. Signing out only flips
//! the session flag; nothing else on the page is reset.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::use_session_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();

    view! {
        <header class="border-b border-gray-200 bg-white">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center gap-8">
                        <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center">
                                <Icon name=icons::DOCUMENT_TEXT class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-gray-900">"DocBoard"</span>
                        </A>
                        <div class="hidden sm:flex items-center gap-4">
                            <A href="/" attr:class="nav-link">"Home"</A>
                            <A href="/dashboard" attr:class="nav-link">"Dashboard"</A>
                        </div>
                    </div>

                    <Show
                        when=move || session.is_signed_in()
                        fallback=|| view! {
                            <div class="flex items-center gap-3">
                                <A href="/login" attr:class="nav-link">"Sign In"</A>
                                <A href="/register" attr:class="btn-primary">"Sign Up"</A>
                            </div>
                        }
                    >
                        <div class="flex items-center gap-3">
                            <span class="text-sm font-medium text-gray-700">
                                {move || session.display_name().unwrap_or_default()}
                            </span>
                            <button
                                type="button"
                                class="btn-secondary flex items-center gap-2"
                                title="Sign out"
                                on:click=move |_| session.sign_out()
                            >
                                <Icon name=icons::LOGOUT class="w-4 h-4" />
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
