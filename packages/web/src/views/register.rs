//! Registration page view.
//!
//! Account creation and the profile write are two separate calls: `sign_up`
//! only creates the credential row, then the first/last name follow-up goes
//! through `update_user_profile` and the auth context is refreshed so the
//! held user carries the new fields.

use dioxus::prelude::*;
use ui::components::{Alert, AlertSeverity, Button, ButtonVariant, Input};
use ui::{use_auth, validate};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(false);

        let first = first_name().trim().to_string();
        let last = last_name().trim().to_string();
        let e = email().trim().to_string();
        let p = password();

        if first.is_empty() || last.is_empty() || e.is_empty() || p.is_empty() {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        if !validate::is_valid_email(&e) {
            error.set(Some("Please enter a valid email address.".to_string()));
            return;
        }
        if p.len() < validate::PASSWORD_MIN_LEN {
            error.set(Some("Password must be at least 6 characters.".to_string()));
            return;
        }

        spawn(async move {
            let user = match auth.sign_up(e, p).await {
                Ok(user) => user,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            match api::update_user_profile(user.id, first, last).await {
                Ok(Some(_)) => {}
                _ => {
                    error.set(Some("Failed to save profile info.".to_string()));
                    return;
                }
            }

            auth.refresh().await;
            success.set(true);
        });
    };

    let loading = auth.state().loading;

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "muted", "Sign up for Plateful" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    Alert { severity: AlertSeverity::Error, "{err}" }
                }
                if success() {
                    Alert {
                        severity: AlertSeverity::Success,
                        "Registration successful!"
                    }
                }

                Input {
                    placeholder: "First Name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }

                Input {
                    placeholder: "Last Name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
