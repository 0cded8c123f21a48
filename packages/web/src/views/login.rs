//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Alert, AlertSeverity, Button, ButtonVariant, Input};
use ui::{use_auth, validate};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);

    // Already signed in: go straight to the recipes list.
    use_effect(move || {
        let state = auth.state();
        if !state.loading && state.user.is_some() {
            nav.replace(Route::Recipes {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(false);

        let e = email().trim().to_string();
        let p = password();

        if let Err(message) = validate::validate_credentials(&e, &p) {
            error.set(Some(message.to_string()));
            return;
        }

        spawn(async move {
            match auth.sign_in(e, p).await {
                Ok(()) => {
                    success.set(true);
                    nav.push(Route::Recipes {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let loading = auth.state().loading;

    rsx! {
        div {
            class: "auth-page",

            h1 { "Plateful" }
            p { class: "muted", "Sign in to manage your recipes" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    Alert { severity: AlertSeverity::Error, "{err}" }
                }
                if success() {
                    Alert { severity: AlertSeverity::Success, "Login successful!" }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
