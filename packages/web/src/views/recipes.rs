//! Recipe list page: app bar, create-recipe modal, inline table editing.

use dioxus::prelude::*;
use ui::components::{
    Alert, AlertSeverity, Button, ButtonVariant, Input, Label, ModalOverlay, TextArea,
};
use ui::{use_auth, use_recipe_list, use_user, validate, CreateRecipeForm, UserAvatar};

use crate::Route;

#[component]
pub fn Recipes() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Bumping this counter re-runs the list fetch; in-flight responses from
    // the previous generation are dropped, not applied.
    let mut refresh = use_signal(|| 0u32);
    let list = use_recipe_list(refresh.into());

    let mut user_id = use_signal(|| Option::<String>::None);
    use_effect(move || {
        let id = auth.state().user.map(|u| u.id);
        if *user_id.peek() != id {
            user_id.set(id);
        }
    });
    let user_vm = use_user(user_id.into());

    let mut create_open = use_signal(|| false);
    let mut profile_open = use_signal(|| false);
    let mut profile_first = use_signal(String::new);
    let mut profile_last = use_signal(String::new);

    // Inline edit state: one row at a time, ingredients/steps drafted as
    // newline-separated text.
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut edit_title = use_signal(String::new);
    let mut edit_description = use_signal(String::new);
    let mut edit_ingredients = use_signal(String::new);
    let mut edit_steps = use_signal(String::new);

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = auth.sign_out().await {
                tracing::warn!("sign-out reported an error: {e}");
            }
            nav.push(Route::Login {});
        });
    };

    let handle_created = move |_| {
        create_open.set(false);
        refresh += 1;
    };

    let handle_cancel = move |_| {
        editing_id.set(None);
        edit_title.set(String::new());
        edit_description.set(String::new());
        edit_ingredients.set(String::new());
        edit_steps.set(String::new());
    };

    let handle_save_profile = move |_| {
        spawn(async move {
            let updated = user_vm
                .update_profile(profile_first().trim().to_string(), profile_last().trim().to_string())
                .await;
            if updated.is_some() {
                auth.refresh().await;
                profile_open.set(false);
            }
        });
    };

    let signed_in = auth.state().user.is_some();
    let display_name = auth
        .state()
        .user
        .map(|u| u.display_name())
        .unwrap_or_default();
    let state = list();

    rsx! {
        div {
            class: "page",

            header {
                class: "app-bar",
                h1 { "Recipes" }
                nav {
                    class: "app-bar-actions",
                    Link { to: Route::MealSearch {}, "Search TheMealDB" }
                    if signed_in {
                        span {
                            class: "avatar-button",
                            onclick: move |_| {
                                let user = user_vm.state().user;
                                profile_first.set(
                                    user.as_ref().and_then(|u| u.first_name.clone()).unwrap_or_default(),
                                );
                                profile_last.set(
                                    user.as_ref().and_then(|u| u.last_name.clone()).unwrap_or_default(),
                                );
                                profile_open.set(true);
                            },
                            UserAvatar { name: display_name.clone(), size: 36 }
                        }
                        Button {
                            variant: ButtonVariant::Text,
                            onclick: handle_logout,
                            "Logout"
                        }
                    } else {
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }

            main {
                class: "page-body",

                if signed_in {
                    div {
                        class: "list-toolbar",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| create_open.set(true),
                            "+ Create Recipe"
                        }
                    }
                }

                if state.loading {
                    p { class: "muted centered", "Loading recipes..." }
                } else if let Some(err) = state.error {
                    Alert { severity: AlertSeverity::Error, "{err}" }
                } else if state.recipes.is_empty() {
                    p { class: "muted centered", "No recipes found." }
                } else {
                    table {
                        class: "recipes-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Description" }
                                th { "Ingredients" }
                                th { "Steps" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for recipe in state.recipes {
                                if editing_id() == Some(recipe.id.clone()) {
                                    tr {
                                        key: "{recipe.id}",
                                        class: "editing",
                                        td {
                                            Input {
                                                value: edit_title(),
                                                oninput: move |evt: FormEvent| edit_title.set(evt.value()),
                                            }
                                        }
                                        td {
                                            TextArea {
                                                value: edit_description(),
                                                oninput: move |evt: FormEvent| edit_description.set(evt.value()),
                                            }
                                        }
                                        td {
                                            TextArea {
                                                placeholder: "One ingredient per line",
                                                value: edit_ingredients(),
                                                oninput: move |evt: FormEvent| edit_ingredients.set(evt.value()),
                                            }
                                        }
                                        td {
                                            TextArea {
                                                placeholder: "One step per line",
                                                value: edit_steps(),
                                                oninput: move |evt: FormEvent| edit_steps.set(evt.value()),
                                            }
                                        }
                                        td {
                                            class: "actions",
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: {
                                                    let id = recipe.id.clone();
                                                    move |_| {
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            let result = api::update_recipe(
                                                                id,
                                                                Some(edit_title().trim().to_string()),
                                                                Some(edit_description().trim().to_string()),
                                                                Some(validate::split_draft_lines(&edit_ingredients())),
                                                                Some(validate::split_draft_lines(&edit_steps())),
                                                                None,
                                                            )
                                                            .await;
                                                            if let Err(e) = result {
                                                                tracing::error!("failed to save recipe: {e}");
                                                            }
                                                            editing_id.set(None);
                                                            refresh += 1;
                                                        });
                                                    }
                                                },
                                                "Save"
                                            }
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: handle_cancel,
                                                "Cancel"
                                            }
                                        }
                                    }
                                } else {
                                    tr {
                                        key: "{recipe.id}",
                                        td {
                                            Link { to: Route::RecipeDetail { id: recipe.id.clone() }, "{recipe.title}" }
                                        }
                                        td { "{recipe.description}" }
                                        td {
                                            ul {
                                                for (idx, ingredient) in recipe.ingredients.iter().enumerate() {
                                                    li { key: "{idx}", "{ingredient}" }
                                                }
                                            }
                                        }
                                        td {
                                            ol {
                                                for (idx, step) in recipe.steps.iter().enumerate() {
                                                    li { key: "{idx}", "{step}" }
                                                }
                                            }
                                        }
                                        td {
                                            class: "actions",
                                            Button {
                                                variant: ButtonVariant::Text,
                                                onclick: {
                                                    let recipe = recipe.clone();
                                                    move |_| {
                                                        editing_id.set(Some(recipe.id.clone()));
                                                        edit_title.set(recipe.title.clone());
                                                        edit_description.set(recipe.description.clone());
                                                        edit_ingredients.set(validate::join_draft_lines(&recipe.ingredients));
                                                        edit_steps.set(validate::join_draft_lines(&recipe.steps));
                                                    }
                                                },
                                                "Edit"
                                            }
                                            Button {
                                                variant: ButtonVariant::Danger,
                                                onclick: {
                                                    let id = recipe.id.clone();
                                                    move |_| {
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::delete_recipe(id).await {
                                                                Ok(true) => {}
                                                                Ok(false) => tracing::warn!("delete matched no recipe"),
                                                                Err(e) => tracing::error!("failed to delete recipe: {e}"),
                                                            }
                                                            refresh += 1;
                                                        });
                                                    }
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if create_open() {
                ModalOverlay {
                    on_close: move |_| create_open.set(false),
                    CreateRecipeForm { on_created: handle_created }
                }
            }

            if profile_open() {
                ModalOverlay {
                    on_close: move |_| profile_open.set(false),
                    div {
                        class: "profile-form",
                        h2 { "Edit Profile" }
                        if let Some(err) = user_vm.state().error {
                            Alert { severity: AlertSeverity::Error, "{err}" }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-first", "First name" }
                            Input {
                                id: "profile-first",
                                value: profile_first(),
                                oninput: move |evt: FormEvent| profile_first.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-last", "Last name" }
                            Input {
                                id: "profile-last",
                                value: profile_last(),
                                oninput: move |evt: FormEvent| profile_last.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: user_vm.state().loading,
                                onclick: handle_save_profile,
                                "Save"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| profile_open.set(false),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
