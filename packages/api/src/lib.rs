//! # API crate — shared fullstack server functions for Plateful
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing, session key |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`mealdb`] | — | TheMealDB HTTP client and the [`Meal`] record |
//! | [`models`] | — | Database models (`User`, `Recipe`) and their client-safe projections |
//! | [`queries`] | `server` | SQL for the `recipes` and `users` tables |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Recipes**: `get_recipes`, `get_recipe_by_id`, `create_recipe`,
//!   `update_recipe`, `delete_recipe`
//! - **Users**: `get_user_by_id`, `update_user_profile`
//! - **TheMealDB**: `search_meals`, `get_meal_by_id`
//!
//! ## Error contract
//!
//! One policy everywhere: backend failure is always `Err(ServerFnError)`,
//! absence is `Ok(None)` (or `Ok(false)` for deletes), and nothing is
//! silently swallowed. A syntactically invalid id counts as absent, not as
//! an error.
//!
//! Every mutation requires an authenticated session. Recipe updates and
//! deletes are additionally scoped to the owning user in SQL, and the
//! profile endpoint only writes the session user's own row; someone else's
//! recipe reads as absent rather than as a distinct denial.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod mealdb;
pub mod models;
pub mod queries;

pub use mealdb::Meal;
pub use models::{RecipeInfo, UserInfo};

#[cfg(feature = "server")]
use models::{Recipe, User};

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let Ok(user_uuid) = uuid::Uuid::parse_str(&user_id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = queries::users::fetch_by_id(pool, user_uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password and open a session.
///
/// Profile fields (first/last name) are a separate follow-up write via
/// [`update_user_profile`]; registration only creates the credential row.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 6 {
        return Err(ServerFnError::new("Password must be at least 6 characters"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "registered new user");

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

/// All recipes, newest first.
#[cfg(feature = "server")]
#[get("/api/recipes")]
pub async fn get_recipes() -> Result<Vec<RecipeInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let recipes = queries::recipes::list(pool).await.map_err(|e| {
        tracing::error!("failed to fetch recipes: {e}");
        ServerFnError::new(e.to_string())
    })?;

    Ok(recipes.iter().map(Recipe::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/recipes")]
pub async fn get_recipes() -> Result<Vec<RecipeInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// A single recipe by id, `None` when absent or the id is not a uuid.
#[cfg(feature = "server")]
#[get("/api/recipes/:id")]
pub async fn get_recipe_by_id(id: String) -> Result<Option<RecipeInfo>, ServerFnError> {
    use crate::db::get_pool;

    let Ok(recipe_uuid) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let recipe = queries::recipes::fetch(pool, recipe_uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(recipe.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/recipes/:id")]
pub async fn get_recipe_by_id(id: String) -> Result<Option<RecipeInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a recipe owned by the session user.
///
/// The owner id is stamped server-side from the session, never taken from
/// the caller.
#[cfg(feature = "server")]
#[post("/api/recipes", session: tower_sessions::Session)]
pub async fn create_recipe(
    title: String,
    description: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    image_url: Option<String>,
) -> Result<RecipeInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let new_recipe = queries::recipes::NewRecipe {
        title,
        description,
        ingredients,
        steps,
        image_url,
    };

    let recipe = queries::recipes::insert(pool, user_uuid, new_recipe)
        .await
        .map_err(|e| {
            tracing::error!("failed to create recipe: {e}");
            ServerFnError::new(e.to_string())
        })?;

    Ok(recipe.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/recipes")]
pub async fn create_recipe(
    title: String,
    description: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    image_url: Option<String>,
) -> Result<RecipeInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a recipe owned by the session user. Absent fields are left
/// untouched. A recipe that does not exist, or belongs to someone else,
/// reads as `Ok(None)`.
#[cfg(feature = "server")]
#[post("/api/recipes/update", session: tower_sessions::Session)]
pub async fn update_recipe(
    id: String,
    title: Option<String>,
    description: Option<String>,
    ingredients: Option<Vec<String>>,
    steps: Option<Vec<String>>,
    image_url: Option<String>,
) -> Result<Option<RecipeInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let Ok(recipe_uuid) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let patch = queries::recipes::RecipePatch {
        title,
        description,
        ingredients,
        steps,
        image_url,
    };

    let recipe = queries::recipes::update(pool, recipe_uuid, user_uuid, &patch)
        .await
        .map_err(|e| {
            tracing::error!("failed to update recipe {id}: {e}");
            ServerFnError::new(e.to_string())
        })?;

    Ok(recipe.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/recipes/update")]
pub async fn update_recipe(
    id: String,
    title: Option<String>,
    description: Option<String>,
    ingredients: Option<Vec<String>>,
    steps: Option<Vec<String>>,
    image_url: Option<String>,
) -> Result<Option<RecipeInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a recipe owned by the session user. `Ok(false)` when no row
/// matched — either the id is unknown or the recipe belongs to someone else.
#[cfg(feature = "server")]
#[post("/api/recipes/delete", session: tower_sessions::Session)]
pub async fn delete_recipe(id: String) -> Result<bool, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let Ok(recipe_uuid) = uuid::Uuid::parse_str(&id) else {
        return Ok(false);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    queries::recipes::delete(pool, recipe_uuid, user_uuid)
        .await
        .map_err(|e| {
            tracing::error!("failed to delete recipe {id}: {e}");
            ServerFnError::new(e.to_string())
        })
}

#[cfg(not(feature = "server"))]
#[post("/api/recipes/delete")]
pub async fn delete_recipe(id: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A user's public profile by id.
#[cfg(feature = "server")]
#[get("/api/users/:id")]
pub async fn get_user_by_id(id: String) -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let Ok(user_uuid) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = queries::users::fetch_by_id(pool, user_uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id")]
pub async fn get_user_by_id(id: String) -> Result<Option<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update the two profile columns for the session user. Everything else is
/// untouched, and callers can only write their own row: a mismatched id is
/// rejected, not applied.
#[cfg(feature = "server")]
#[post("/api/users/profile", session: tower_sessions::Session)]
pub async fn update_user_profile(
    id: String,
    first_name: String,
    last_name: String,
) -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let session_user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(session_user_id) = session_user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let session_uuid =
        uuid::Uuid::parse_str(&session_user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let Ok(user_uuid) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    if user_uuid != session_uuid {
        return Err(ServerFnError::new("Not authenticated"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = queries::users::update_profile(pool, user_uuid, &first_name, &last_name)
        .await
        .map_err(|e| {
            tracing::error!("failed to update profile for {id}: {e}");
            ServerFnError::new(e.to_string())
        })?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/users/profile")]
pub async fn update_user_profile(
    id: String,
    first_name: String,
    last_name: String,
) -> Result<Option<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// TheMealDB
// ---------------------------------------------------------------------------

/// Search TheMealDB by meal name. No matches is an empty list.
#[cfg(feature = "server")]
#[get("/api/mealdb/search")]
pub async fn search_meals(query: String) -> Result<Vec<Meal>, ServerFnError> {
    let client = mealdb::MealDbClient::new();
    client
        .search_meals(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/mealdb/search")]
pub async fn search_meals(query: String) -> Result<Vec<Meal>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Look up a single TheMealDB meal by id.
#[cfg(feature = "server")]
#[get("/api/mealdb/:id")]
pub async fn get_meal_by_id(id: String) -> Result<Option<Meal>, ServerFnError> {
    let client = mealdb::MealDbClient::new();
    client
        .lookup_meal(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/mealdb/:id")]
pub async fn get_meal_by_id(id: String) -> Result<Option<Meal>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
