//! TheMealDB search page.

use api::Meal;
use dioxus::prelude::*;
use ui::components::{Alert, AlertSeverity, Button, ButtonVariant, Input};

use crate::Route;

#[component]
pub fn MealSearch() -> Element {
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Meal>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match api::search_meals(query()).await {
                Ok(meals) => results.set(meals),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    results.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            main {
                class: "page-body",

                h1 { class: "centered", "Search Recipes (TheMealDB)" }

                form {
                    class: "search-form",
                    onsubmit: handle_search,
                    Input {
                        placeholder: "Search for a recipe",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Searching..." } else { "Search" }
                    }
                }

                if let Some(err) = error() {
                    Alert { severity: AlertSeverity::Error, "{err}" }
                }

                div {
                    class: "card-grid",
                    for meal in results() {
                        div {
                            key: "{meal.id}",
                            class: "meal-card",
                            h3 { "{meal.name}" }
                            p {
                                class: "muted",
                                {format!(
                                    "{} | {}",
                                    meal.area.as_deref().unwrap_or("Unknown"),
                                    meal.category.as_deref().unwrap_or("Unknown"),
                                )}
                            }
                            if let Some(thumb) = meal.thumbnail.as_ref() {
                                img { class: "meal-thumb", src: "{thumb}", alt: "{meal.name}" }
                            }
                            Link {
                                to: Route::MealDetail { id: meal.id.clone() },
                                "View Details"
                            }
                        }
                    }
                }

                if results().is_empty() && !loading() {
                    p { class: "muted centered", "No results found." }
                }
            }
        }
    }
}
