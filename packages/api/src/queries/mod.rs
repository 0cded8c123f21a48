//! # Query layer — SQL for the `recipes` and `users` tables
//!
//! Plain functions over a `sqlx::PgPool`, shared by the server functions and
//! the Postgres-backed tests. Recipe mutations are scoped to the owning user
//! in SQL, so an update or delete issued for someone else's recipe matches
//! no row.

#[cfg(feature = "server")]
pub mod recipes;

#[cfg(feature = "server")]
pub mod users;
