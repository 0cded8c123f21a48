//! Modal form for creating a new recipe.

use dioxus::prelude::*;

use crate::components::{Alert, AlertSeverity, Button, ButtonVariant, Input, Label, TextArea};

/// Create-recipe form with dynamic ingredient/step rows.
///
/// The owner is stamped server-side from the session; the form never handles
/// a user id. `on_created` fires after a successful insert so the parent can
/// close the modal and refresh its list.
#[component]
pub fn CreateRecipeForm(on_created: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut ingredients = use_signal(|| vec![String::new()]);
    let mut steps = use_signal(|| vec![String::new()]);
    let mut image_url = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            success.set(false);

            let t = title().trim().to_string();
            let d = description().trim().to_string();
            let ings: Vec<String> = ingredients()
                .iter()
                .map(|i| i.trim().to_string())
                .collect();
            let sts: Vec<String> = steps().iter().map(|s| s.trim().to_string()).collect();

            if t.is_empty()
                || d.is_empty()
                || ings.iter().any(|i| i.is_empty())
                || sts.iter().any(|s| s.is_empty())
            {
                error.set(Some(
                    "Title, description, ingredients, and steps are required.".to_string(),
                ));
                return;
            }

            let image = {
                let url = image_url().trim().to_string();
                if url.is_empty() { None } else { Some(url) }
            };

            loading.set(true);
            match api::create_recipe(t, d, ings, sts, image).await {
                Ok(_) => {
                    loading.set(false);
                    success.set(true);
                    title.set(String::new());
                    description.set(String::new());
                    ingredients.set(vec![String::new()]);
                    steps.set(vec![String::new()]);
                    image_url.set(String::new());
                    on_created.call(());
                }
                Err(e) => {
                    tracing::error!("recipe creation failed: {e}");
                    loading.set(false);
                    error.set(Some("Failed to create recipe.".to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "recipe-form",
            onsubmit: handle_submit,

            h2 { "Create New Recipe" }

            if let Some(err) = error() {
                Alert { severity: AlertSeverity::Error, "{err}" }
            }
            if success() {
                Alert { severity: AlertSeverity::Success, "Recipe created!" }
            }

            div {
                class: "form-field",
                Label { html_for: "recipe-title", "Title" }
                Input {
                    id: "recipe-title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "recipe-description", "Description" }
                TextArea {
                    id: "recipe-description",
                    rows: 2,
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            h3 { "Ingredients" }
            for (idx, ingredient) in ingredients().into_iter().enumerate() {
                div {
                    key: "ingredient-{idx}",
                    class: "form-row",
                    Input {
                        placeholder: format!("Ingredient {}", idx + 1),
                        value: ingredient,
                        oninput: move |evt: FormEvent| {
                            ingredients.write()[idx] = evt.value();
                        },
                    }
                    if ingredients().len() > 1 {
                        Button {
                            variant: ButtonVariant::Text,
                            onclick: move |_| { ingredients.write().remove(idx); },
                            "Remove"
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Text,
                onclick: move |_| ingredients.write().push(String::new()),
                "+ Add Ingredient"
            }

            h3 { "Steps" }
            for (idx, step) in steps().into_iter().enumerate() {
                div {
                    key: "step-{idx}",
                    class: "form-row",
                    Input {
                        placeholder: format!("Step {}", idx + 1),
                        value: step,
                        oninput: move |evt: FormEvent| {
                            steps.write()[idx] = evt.value();
                        },
                    }
                    if steps().len() > 1 {
                        Button {
                            variant: ButtonVariant::Text,
                            onclick: move |_| { steps.write().remove(idx); },
                            "Remove"
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Text,
                onclick: move |_| steps.write().push(String::new()),
                "+ Add Step"
            }

            div {
                class: "form-field",
                Label { html_for: "recipe-image-url", "Image URL (optional)" }
                Input {
                    id: "recipe-image-url",
                    value: image_url(),
                    oninput: move |evt: FormEvent| image_url.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "submit-btn",
                disabled: loading(),
                if loading() { "Creating..." } else { "Create Recipe" }
            }
        }
    }
}
