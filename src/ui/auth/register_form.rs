//! Register form component
//!
//! Email, username and password form with a strength meter. A valid submit
//! signs the new account in straight away.

use leptos::prelude::*;

use super::context::use_session_context;
use crate::core::Account;
use crate::core::validation::{
    PasswordStrength, password_strength, validate_confirmation, validate_email,
    validate_new_password, validate_registration, validate_username,
};
use crate::ui::common::FormField;
use crate::ui::icon::{Icon, icons};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    // Form state
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let username_val = username.get();
        let errors = validate_registration(
            &email_val,
            &username_val,
            &password.get(),
            &confirm_password.get(),
        );
        email_error.set(errors.email.as_ref().map(ToString::to_string));
        username_error.set(errors.username.as_ref().map(ToString::to_string));
        password_error.set(errors.password.as_ref().map(ToString::to_string));
        confirm_error.set(errors.confirm.as_ref().map(ToString::to_string));

        if !errors.is_valid() {
            return;
        }

        session.sign_in(Account::new(email_val.trim()).with_username(username_val.trim()));
        password.set(String::new());
        confirm_password.set(String::new());
        if let Some(callback) = on_success {
            callback.run(());
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 border border-gray-200">
            <form on:submit=on_submit class="space-y-5" novalidate>
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900">"Create Account"</h2>
                    <p class="mt-2 text-sm text-gray-600">"Start collecting your documents"</p>
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
                        email_error.set(validate_email(&email.get()).err().map(|e| e.to_string()));
                    })
                    error=email_error
                />

                <FormField
                    label="Username"
                    name="username"
                    autocomplete="username"
                    placeholder="Choose a username"
                    value=username.into()
                    on_input=Callback::new(move |value| {
                        username.set(value);
                        username_error.set(None);
                    })
                    on_blur=Callback::new(move |_| {
                        username_error
                            .set(validate_username(&username.get()).err().map(|e| e.to_string()));
                    })
                    error=username_error
                />

                // Password field
                <div class="space-y-1.5">
                    <label for="password" class="label">"Password"</label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="new-password"
                            placeholder="Create a strong password"
                            class="input-base pr-10"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            on:blur=move |_| {
                                password_error.set(
                                    validate_new_password(&password.get()).err().map(|e| e.to_string()),
                                );
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
                    <StrengthMeter strength=strength />
                    {move || password_error.get().map(|error| view! {
                        <p class="text-sm text-red-500">{error}</p>
                    })}
                </div>

                // Confirm password field
                <div class="space-y-1.5">
                    <label for="confirm-password" class="label">"Confirm Password"</label>
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="confirm-password"
                        name="confirm-password"
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        class="input-base"
                        class:border-red-500=move || confirm_error.get().is_some()
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            confirm_password.set(event_target_value(&ev));
                            confirm_error.set(None);
                        }
                        on:blur=move |_| {
                            confirm_error.set(
                                validate_confirmation(&password.get(), &confirm_password.get())
                                    .err()
                                    .map(|e| e.to_string()),
                            );
                        }
                    />
                    {move || confirm_error.get().map(|error| view! {
                        <p class="text-sm text-red-500">{error}</p>
                    })}
                </div>

                <button type="submit" class="btn-primary w-full">"Create Account"</button>

                <div class="text-center text-sm text-gray-600">
                    "Already have an account? "
                    <button
                        type="button"
                        class="text-indigo-600 hover:text-indigo-700 font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_login_click {
                                callback.run(());
                            }
                        }
                    >
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Three-bar password strength indicator, hidden while the password is empty
#[component]
fn StrengthMeter(#[prop(into)] strength: Signal<PasswordStrength>) -> impl IntoView {
    let bar_color = move || match strength.get() {
        PasswordStrength::None | PasswordStrength::Weak => "bg-red-500",
        PasswordStrength::Medium => "bg-yellow-500",
        PasswordStrength::Strong => "bg-green-500",
    };
    let text_color = move || match strength.get() {
        PasswordStrength::None | PasswordStrength::Weak => "text-red-500",
        PasswordStrength::Medium => "text-yellow-500",
        PasswordStrength::Strong => "text-green-500",
    };
    let bar_class = move |bar: u8| {
        let fill = if strength.get().level() >= bar {
            bar_color()
        } else {
            "bg-gray-300"
        };
        format!("h-1 flex-1 rounded {fill}")
    };

    view! {
        <Show when=move || strength.get() != PasswordStrength::None>
            <div class="mt-2">
                <div class="flex gap-1 mb-1">
                    <div class=move || bar_class(1)></div>
                    <div class=move || bar_class(2)></div>
                    <div class=move || bar_class(3)></div>
                </div>
                <p class=move || format!("text-xs {}", text_color())>
                    {move || strength.get().label()}
                </p>
            </div>
        </Show>
    }
}
