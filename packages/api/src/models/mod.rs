//! Data models for the application.

mod recipe;
mod user;

#[cfg(feature = "server")]
pub use recipe::Recipe;
pub use recipe::RecipeInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
