//! Read-only recipe card used by the detail view.

use api::RecipeInfo;
use dioxus::prelude::*;

#[component]
pub fn RecipeCard(recipe: RecipeInfo) -> Element {
    rsx! {
        div {
            class: "recipe-card",

            h2 { "{recipe.title}" }
            p { class: "recipe-description", "{recipe.description}" }

            h3 { "Ingredients" }
            if recipe.ingredients.is_empty() {
                p { class: "muted", "None" }
            } else {
                div {
                    class: "chip-row",
                    for (idx, ingredient) in recipe.ingredients.iter().enumerate() {
                        span { key: "{idx}", class: "chip", "{ingredient}" }
                    }
                }
            }

            h3 { "Steps" }
            if recipe.steps.is_empty() {
                p { class: "muted", "None" }
            } else {
                ol {
                    for (idx, step) in recipe.steps.iter().enumerate() {
                        li { key: "{idx}", "{step}" }
                    }
                }
            }

            if let Some(url) = recipe.image_url.as_ref() {
                img { class: "recipe-image", src: "{url}", alt: "{recipe.title}" }
            }
        }
    }
}
