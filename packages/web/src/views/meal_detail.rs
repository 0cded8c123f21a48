//! Single TheMealDB meal detail page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn MealDetail(id: String) -> Element {
    let fetch_id = id.clone();
    let meal = use_resource(move || {
        let id = fetch_id.clone();
        async move { api::get_meal_by_id(id).await }
    });

    rsx! {
        div {
            class: "page",
            main {
                class: "page-body narrow",

                Link { to: Route::MealSearch {}, class: "back-link", "← Back to search" }

                {match &*meal.read_unchecked() {
                    None => rsx! {
                        p { class: "muted centered", "Loading meal..." }
                    },
                    Some(Ok(Some(meal))) => rsx! {
                        div {
                            class: "recipe-card",
                            h2 { "{meal.name}" }
                            p {
                                class: "muted",
                                {format!(
                                    "{} | {}",
                                    meal.area.as_deref().unwrap_or("Unknown"),
                                    meal.category.as_deref().unwrap_or("Unknown"),
                                )}
                            }
                            if let Some(thumb) = meal.thumbnail.as_ref() {
                                img { class: "recipe-image", src: "{thumb}", alt: "{meal.name}" }
                            }
                            if let Some(instructions) = meal.instructions.as_ref() {
                                h3 { "Instructions" }
                                p { class: "instructions", "{instructions}" }
                            }
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        p { class: "muted centered", "Meal not found." }
                    },
                    Some(Err(_)) => rsx! {
                        p { class: "error centered", "Failed to fetch meal" }
                    },
                }}
            }
        }
    }
}
