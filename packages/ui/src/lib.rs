//! This crate contains all shared UI for the workspace.

pub mod components;

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod hooks;
pub use hooks::{use_recipe_list, use_user, RecipeList, UserState, UserVm};

pub mod validate;

mod recipe_form;
pub use recipe_form::CreateRecipeForm;

mod recipe_card;
pub use recipe_card::RecipeCard;

mod user_avatar;
pub use user_avatar::{initials, UserAvatar};
