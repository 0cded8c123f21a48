//! # Recipe model
//!
//! [`Recipe`] (server only) is the full `recipes` row. Ingredients and steps
//! are Postgres `TEXT[]` columns; their order is the display order, so they
//! map to `Vec<String>` with no reordering anywhere in the pipeline.
//!
//! [`RecipeInfo`] is the projection that crosses the server/client boundary:
//! uuids become strings and `created_at` is rendered as RFC 3339.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full recipe record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub user_id: Uuid,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Recipe {
    /// Convert to RecipeInfo for client consumption.
    pub fn to_info(&self) -> RecipeInfo {
        RecipeInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            user_id: self.user_id.to_string(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Recipe information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub user_id: String,
    pub image_url: Option<String>,
    pub created_at: String,
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn to_info_preserves_field_order() {
        let recipe = Recipe {
            id: Uuid::nil(),
            title: "Carbonara".to_string(),
            description: "Roman classic".to_string(),
            ingredients: vec!["spaghetti".into(), "guanciale".into(), "eggs".into()],
            steps: vec!["boil".into(), "fry".into(), "toss".into()],
            user_id: Uuid::nil(),
            image_url: None,
            created_at: Utc::now(),
        };

        let info = recipe.to_info();
        assert_eq!(info.ingredients, recipe.ingredients);
        assert_eq!(info.steps, recipe.steps);
        assert_eq!(info.id, Uuid::nil().to_string());
    }
}
