//! Queries for the `recipes` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Recipe;

/// Caller-supplied fields for a new recipe. The owner arrives separately,
/// resolved from the session by the calling server function.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image_url: Option<String>,
}

/// Partial update. `None` leaves the column as it is.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// All recipes, newest first.
pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Recipe>> {
    sqlx::query_as("SELECT * FROM recipes ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<Recipe>> {
    sqlx::query_as("SELECT * FROM recipes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, owner: Uuid, recipe: NewRecipe) -> sqlx::Result<Recipe> {
    let image_url = recipe.image_url.filter(|u| !u.trim().is_empty());

    sqlx::query_as(
        "INSERT INTO recipes (title, description, ingredients, steps, user_id, image_url)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(&recipe.ingredients)
    .bind(&recipe.steps)
    .bind(owner)
    .bind(&image_url)
    .fetch_one(pool)
    .await
}

/// `None` when no recipe with this id belongs to `owner`.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    patch: &RecipePatch,
) -> sqlx::Result<Option<Recipe>> {
    sqlx::query_as(
        "UPDATE recipes SET
            title = COALESCE($3, title),
            description = COALESCE($4, description),
            ingredients = COALESCE($5, ingredients),
            steps = COALESCE($6, steps),
            image_url = COALESCE($7, image_url)
         WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(owner)
    .bind(&patch.title)
    .bind(&patch.description)
    .bind(&patch.ingredients)
    .bind(&patch.steps)
    .bind(&patch.image_url)
    .fetch_optional(pool)
    .await
}

/// `false` when no recipe with this id belongs to `owner`.
pub async fn delete(pool: &PgPool, id: Uuid, owner: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM recipes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
