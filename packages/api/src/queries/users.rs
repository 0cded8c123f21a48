//! Queries for the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

pub async fn fetch_by_id(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Writes the two profile columns and bumps `updated_at`. Credentials and
/// email are untouched.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    first_name: &str,
    last_name: &str,
) -> sqlx::Result<Option<User>> {
    sqlx::query_as(
        "UPDATE users SET first_name = $2, last_name = $3, updated_at = NOW()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(pool)
    .await
}
