//! Home page component
//!
//! Static marketing page: hero, feature cards and footer.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_session_context;
use crate::ui::icon::{Icon, icons};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    // Signed-in users go straight to their documents
    let on_get_started = move |_| {
        let navigate = use_navigate();
        if session.is_signed_in() {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/login", Default::default());
        }
    };

    view! {
        <Title text="DocBoard - Keep your documents in one place" />
        <Meta name="description" content="Collect, edit and organise documents with titles, descriptions and images." />

        <div class="bg-white">
            // Hero Section
            <section class="mx-auto max-w-7xl py-16 sm:px-6 lg:px-8">
                <div class="relative isolate overflow-hidden bg-gray-900 px-6 py-16 shadow-2xl sm:rounded-3xl sm:px-16 md:py-24 lg:flex lg:gap-x-20 lg:px-24">
                    <div class="mx-auto max-w-md text-center lg:mx-0 lg:flex-auto lg:text-left">
                        <h1 class="text-3xl font-semibold tracking-tight text-white sm:text-4xl">
                            "Boost your productivity. Start using DocBoard today."
                        </h1>
                        <p class="mt-6 text-lg text-gray-300">
                            "Write down a title and a description, attach an image, and keep every document a click away."
                        </p>
                        <div class="mt-10 flex items-center justify-center gap-x-6 lg:justify-start">
                            <button class="btn-hero" on:click=on_get_started>
                                "Get started"
                            </button>
                            <a href="#features" class="flex items-center gap-1 text-sm font-semibold text-white">
                                "Learn more"
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                            </a>
                        </div>
                    </div>
                    <div class="mt-16 hidden lg:flex items-center justify-center lg:mt-0" aria-hidden="true">
                        <div class="w-64 h-64 rounded-3xl bg-white/5 ring-1 ring-white/10 flex items-center justify-center">
                            <Icon name=icons::DOCUMENT_TEXT class="w-32 h-32 text-indigo-300" />
                        </div>
                    </div>
                </div>
            </section>

            // Features Section
            <section id="features" class="bg-gray-100 py-16">
                <div class="max-w-7xl mx-auto px-6 lg:px-8">
                    <h2 class="text-center text-3xl font-bold text-gray-800 mb-8">"Why Choose Us"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                        <FeatureCard
                            icon=icons::LIGHTNING
                            title="Fast"
                            description="Simplify your tasks and increase efficiency with a board that never makes you wait."
                        />
                        <FeatureCard
                            icon=icons::USERS
                            title="Simple"
                            description="Seamlessly fits the way you already keep notes. No setup required."
                        />
                        <FeatureCard
                            icon=icons::CHAT
                            title="Supported"
                            description="Get help from our dedicated team whenever you need it."
                        />
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 bg-white rounded-lg shadow-md">
            <div class="w-12 h-12 rounded-lg bg-indigo-100 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6 text-indigo-600" />
            </div>
            <h3 class="text-xl font-bold text-gray-900">{title}</h3>
            <p class="text-gray-600 mt-2">{description}</p>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400 py-8">
            <div class="max-w-7xl mx-auto px-6 lg:px-8 text-center">
                <p>"© 2026 DocBoard. All rights reserved."</p>
                <div class="flex justify-center gap-4 mt-4">
                    <a href="#" class="hover:text-white">"Privacy Policy"</a>
                    <a href="#" class="hover:text-white">"Terms of Service"</a>
                    <a href="#" class="hover:text-white">"Contact Us"</a>
                </div>
            </div>
        </footer>
    }
}
