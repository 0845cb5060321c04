//! Login form component
//!
//! Email and password form. A valid submit marks the session as signed in.

use leptos::prelude::*;

use super::context::use_session_context;
use crate::core::Account;
use crate::core::validation::{validate_email, validate_login};
use crate::ui::common::FormField;
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to register form
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let errors = validate_login(&email_val, &password.get());
        email_error.set(errors.email.as_ref().map(ToString::to_string));
        password_error.set(errors.password.as_ref().map(ToString::to_string));

        if !errors.is_valid() {
            return;
        }

        session.sign_in(Account::new(email_val.trim()));
        password.set(String::new());
        if let Some(callback) = on_success {
            callback.run(());
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 border border-gray-200">
            <form on:submit=on_submit class="space-y-6" novalidate>
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-gray-600">"Sign in to your account to continue"</p>
                </div>

                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value=email.into()
                    on_input=Callback::new(move |value| {
                        email.set(value);
                        email_error.set(None);
                    })
                    on_blur=Callback::new(move |_| {
                        let value = email.get();
                        if !value.is_empty() {
                            email_error.set(validate_email(&value).err().map(|e| e.to_string()));
                        }
                    })
                    error=email_error
                />

                // Password field
                <div class="space-y-1.5">
                    <label for="password" class="label">"Password"</label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            class="input-base pr-10"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || password_error.get().map(|error| view! {
                        <p class="text-sm text-red-500">{error}</p>
                    })}
                </div>

                <button type="submit" class="btn-primary w-full">"Sign In"</button>

                // Register link
                <div class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="text-indigo-600 hover:text-indigo-700 font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_register_click {
                                callback.run(());
                            }
                        }
                    >
                        "Sign up"
                    </button>
                </div>
            </form>
        </div>
    }
}
