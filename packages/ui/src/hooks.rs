//! View-model hooks: fetch-on-mount wrappers exposing `{data, loading, error}`.

use api::{RecipeInfo, UserInfo};
use dioxus::prelude::*;

/// State held by [`use_recipe_list`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeList {
    pub recipes: Vec<RecipeInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for RecipeList {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Fetch all recipes on mount and whenever `refresh` changes.
///
/// Success stores the returned sequence and clears the error; failure stores
/// an empty list and a fixed message. The fetch runs inside `use_resource`,
/// so bumping `refresh` drops the stale in-flight future before starting a
/// new one — a superseded response can never overwrite newer state.
pub fn use_recipe_list(refresh: ReadOnlySignal<u32>) -> Signal<RecipeList> {
    let mut state = use_signal(RecipeList::default);

    let _ = use_resource(move || {
        // Reading here subscribes the resource to the refresh counter.
        let _generation = refresh();
        async move {
            state.write().loading = true;
            match api::get_recipes().await {
                Ok(recipes) => state.set(RecipeList {
                    recipes,
                    loading: false,
                    error: None,
                }),
                Err(e) => {
                    tracing::error!("recipe list fetch failed: {e}");
                    state.set(RecipeList {
                        recipes: Vec::new(),
                        loading: false,
                        error: Some("Failed to fetch recipes".to_string()),
                    });
                }
            }
        }
    });

    state
}

/// State held by [`use_user`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Handle returned by [`use_user`]: the fetched state plus the profile
/// mutation.
#[derive(Clone, Copy)]
pub struct UserVm {
    id: ReadOnlySignal<Option<String>>,
    state: Signal<UserState>,
}

/// Fetch a user by id, refetching when the id changes.
///
/// A `None` id resolves immediately to `{user: None, loading: false,
/// error: None}` without touching the backend.
pub fn use_user(id: ReadOnlySignal<Option<String>>) -> UserVm {
    let mut state = use_signal(move || UserState {
        loading: id.peek().is_some(),
        ..UserState::default()
    });

    let _ = use_resource(move || {
        let id = id();
        async move {
            let Some(id) = id else {
                state.set(UserState::default());
                return;
            };
            state.write().loading = true;
            match api::get_user_by_id(id).await {
                Ok(user) => state.set(UserState {
                    user,
                    loading: false,
                    error: None,
                }),
                Err(e) => {
                    tracing::error!("user fetch failed: {e}");
                    state.set(UserState {
                        user: None,
                        loading: false,
                        error: Some("Failed to fetch user".to_string()),
                    });
                }
            }
        }
    });

    UserVm { id, state }
}

impl UserVm {
    /// Snapshot of the current user state.
    pub fn state(&self) -> UserState {
        self.state.read().clone()
    }

    /// Update the profile fields, replacing the held user on success.
    pub async fn update_profile(
        mut self,
        first_name: String,
        last_name: String,
    ) -> Option<UserInfo> {
        let Some(id) = self.id.peek().clone() else {
            return None;
        };

        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        match api::update_user_profile(id, first_name, last_name).await {
            Ok(user) => {
                self.state.set(UserState {
                    user: user.clone(),
                    loading: false,
                    error: None,
                });
                user
            }
            Err(e) => {
                tracing::error!("profile update failed: {e}");
                let user = self.state.peek().user.clone();
                self.state.set(UserState {
                    user,
                    loading: false,
                    error: Some("Failed to update user".to_string()),
                });
                None
            }
        }
    }
}
