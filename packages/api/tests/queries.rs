//! Postgres-backed tests for the query layer. `#[sqlx::test]` gives each
//! test a fresh database with the crate's migrations applied, so these need
//! a reachable Postgres via `DATABASE_URL`.

#![cfg(feature = "server")]

use sqlx::PgPool;
use uuid::Uuid;

use api::queries::recipes::{self, NewRecipe, RecipePatch};
use api::queries::users;

async fn seed_user(pool: &PgPool, email: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES ($1, 'unused') RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("seed user")
}

fn carbonara() -> NewRecipe {
    NewRecipe {
        title: "Carbonara".to_string(),
        description: "Roman classic".to_string(),
        ingredients: vec!["spaghetti".into(), "guanciale".into(), "eggs".into()],
        steps: vec!["boil".into(), "fry".into(), "toss".into()],
        image_url: None,
    }
}

#[sqlx::test]
async fn created_recipe_round_trips_with_generated_fields(pool: PgPool) {
    let owner = seed_user(&pool, "cook@example.com").await;

    let created = recipes::insert(&pool, owner, carbonara())
        .await
        .expect("insert");
    assert_ne!(created.id, Uuid::nil());
    assert_eq!(created.user_id, owner);

    let fetched = recipes::fetch(&pool, created.id)
        .await
        .expect("fetch")
        .expect("recipe present");
    assert_eq!(fetched.title, "Carbonara");
    assert_eq!(fetched.description, "Roman classic");
    assert_eq!(fetched.ingredients, vec!["spaghetti", "guanciale", "eggs"]);
    assert_eq!(fetched.steps, vec!["boil", "fry", "toss"]);
    assert_eq!(fetched.image_url, None);
    assert_eq!(fetched.user_id, owner);
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test]
async fn delete_reports_whether_a_row_matched(pool: PgPool) {
    let owner = seed_user(&pool, "cook@example.com").await;

    let missing = recipes::delete(&pool, Uuid::new_v4(), owner)
        .await
        .expect("delete missing");
    assert!(!missing);

    let created = recipes::insert(&pool, owner, carbonara())
        .await
        .expect("insert");
    assert!(recipes::delete(&pool, created.id, owner)
        .await
        .expect("delete"));
    assert!(recipes::fetch(&pool, created.id)
        .await
        .expect("fetch")
        .is_none());
    assert!(!recipes::delete(&pool, created.id, owner)
        .await
        .expect("delete again"));
}

#[sqlx::test]
async fn mutations_only_match_the_owners_rows(pool: PgPool) {
    let owner = seed_user(&pool, "cook@example.com").await;
    let other = seed_user(&pool, "guest@example.com").await;

    let created = recipes::insert(&pool, owner, carbonara())
        .await
        .expect("insert");

    let patch = RecipePatch {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let denied = recipes::update(&pool, created.id, other, &patch)
        .await
        .expect("update as non-owner");
    assert!(denied.is_none());
    assert!(!recipes::delete(&pool, created.id, other)
        .await
        .expect("delete as non-owner"));

    let untouched = recipes::fetch(&pool, created.id)
        .await
        .expect("fetch")
        .expect("recipe present");
    assert_eq!(untouched.title, "Carbonara");

    let renamed = recipes::update(&pool, created.id, owner, &patch)
        .await
        .expect("update as owner")
        .expect("row matched");
    assert_eq!(renamed.title, "Hijacked");
}

#[sqlx::test]
async fn update_leaves_absent_fields_untouched(pool: PgPool) {
    let owner = seed_user(&pool, "cook@example.com").await;
    let created = recipes::insert(&pool, owner, carbonara())
        .await
        .expect("insert");

    let patch = RecipePatch {
        description: Some("Weeknight version".to_string()),
        ..Default::default()
    };
    let updated = recipes::update(&pool, created.id, owner, &patch)
        .await
        .expect("update")
        .expect("row matched");

    assert_eq!(updated.title, "Carbonara");
    assert_eq!(updated.description, "Weeknight version");
    assert_eq!(updated.ingredients, created.ingredients);
    assert_eq!(updated.steps, created.steps);
}

#[sqlx::test]
async fn profile_update_writes_only_name_columns(pool: PgPool) {
    let id = seed_user(&pool, "cook@example.com").await;

    let updated = users::update_profile(&pool, id, "Ada", "Lovelace")
        .await
        .expect("update")
        .expect("row matched");
    assert_eq!(updated.first_name.as_deref(), Some("Ada"));
    assert_eq!(updated.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(updated.email, "cook@example.com");
    assert_eq!(updated.password_hash, "unused");

    let missing = users::update_profile(&pool, Uuid::new_v4(), "A", "B")
        .await
        .expect("update missing");
    assert!(missing.is_none());
}
