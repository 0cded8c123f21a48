//! Single-recipe detail page.

use dioxus::prelude::*;
use ui::RecipeCard;

use crate::Route;

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let fetch_id = id.clone();
    let recipe = use_resource(move || {
        let id = fetch_id.clone();
        async move { api::get_recipe_by_id(id).await }
    });

    rsx! {
        div {
            class: "page",
            main {
                class: "page-body narrow",

                Link { to: Route::Recipes {}, class: "back-link", "← Back to recipes" }

                {match &*recipe.read_unchecked() {
                    None => rsx! {
                        p { class: "muted centered", "Loading recipe..." }
                    },
                    Some(Ok(Some(recipe))) => rsx! {
                        RecipeCard { recipe: recipe.clone() }
                    },
                    Some(Ok(None)) => rsx! {
                        p { class: "muted centered", "Recipe not found." }
                    },
                    Some(Err(_)) => rsx! {
                        p { class: "error centered", "Failed to fetch recipe" }
                    },
                }}
            }
        }
    }
}
