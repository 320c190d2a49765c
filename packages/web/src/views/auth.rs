//! Auth screen: login and signup forms sharing one card via tabs.
//!
//! Login and signup are independent little state machines — each owns its
//! submitting flag, so a hanging signup never blocks a login attempt. On
//! mount, a token the backend still accepts skips the form entirely and
//! redirects to the notes view.

use api::{ApiError, RegisterData};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{make_client, push_toast, use_session, use_toast, SessionState, ToastLevel};

use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Signup,
}

/// Auth page component.
#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();
    let mut tab = use_signal(|| AuthTab::Login);

    // Already holding a valid token? Straight to the notes view.
    let _verify = use_resource(move || async move {
        if make_client().check_token().await {
            nav.replace(Route::Notes {});
        }
    });

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Notes App" }
                p { class: "auth-subtitle", "Manage your notes with ease" }

                div {
                    class: "auth-tabs",
                    button {
                        class: if tab() == AuthTab::Login { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| tab.set(AuthTab::Login),
                        "Sign in"
                    }
                    button {
                        class: if tab() == AuthTab::Signup { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| tab.set(AuthTab::Signup),
                        "Sign up"
                    }
                }

                {match tab() {
                    AuthTab::Login => rsx! { LoginForm {} },
                    AuthTab::Signup => rsx! { SignupForm { on_registered: move |_| tab.set(AuthTab::Login) } },
                }}
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let nav = use_navigator();
    let mut session_state = use_session();
    let mut toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            submitting.set(true);
            match make_client().login(email().trim(), &password()).await {
                Ok(data) => {
                    session_state.set(SessionState {
                        session: Some(data.to_session()),
                        loading: false,
                    });
                    push_toast(&mut toasts, ToastLevel::Success, "Signed in.");
                    nav.push(Route::Notes {});
                }
                Err(ApiError::Network(e)) => {
                    tracing::error!("login failed: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, "Network error.");
                }
                Err(e) => {
                    tracing::warn!("login rejected: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, "Sign-in failed.");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_login,

            div {
                class: "form-field",
                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    class: "w-full",
                    placeholder: "you@example.com",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
                    r#type: "password",
                    class: "w-full",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

#[component]
fn SignupForm(on_registered: EventHandler<()>) -> Element {
    let mut toasts = use_toast();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let first = first_name().trim().to_string();
            let last = last_name().trim().to_string();
            let address = email().trim().to_string();
            let pass = password();
            let confirm = confirm_password();

            if first.is_empty() || last.is_empty() {
                error.set(Some("First and last name are required".to_string()));
                return;
            }
            if address.is_empty() || !address.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if pass != confirm {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            submitting.set(true);
            let data = RegisterData {
                first_name: first,
                last_name: last,
                email: address,
                password: pass,
                confirm_password: confirm,
            };
            match make_client().register(&data).await {
                Ok(()) => {
                    // Registration never logs the user in.
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Account created. You can sign in now.",
                    );
                    on_registered.call(());
                }
                Err(e) => {
                    tracing::warn!("registration failed: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, "Failed to create the account.");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_signup,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                Label { html_for: "signup-first-name", "First name" }
                Input {
                    id: "signup-first-name",
                    class: "w-full",
                    placeholder: "Your first name",
                    required: true,
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "signup-last-name", "Last name" }
                Input {
                    id: "signup-last-name",
                    class: "w-full",
                    placeholder: "Your last name",
                    required: true,
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "signup-email", "Email" }
                Input {
                    id: "signup-email",
                    r#type: "email",
                    class: "w-full",
                    placeholder: "you@example.com",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "signup-password", "Password" }
                Input {
                    id: "signup-password",
                    r#type: "password",
                    class: "w-full",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "signup-confirm-password", "Confirm password" }
                Input {
                    id: "signup-confirm-password",
                    r#type: "password",
                    class: "w-full",
                    required: true,
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Creating account..." } else { "Create account" }
            }
        }
    }
}
