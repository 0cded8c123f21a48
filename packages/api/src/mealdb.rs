//! # TheMealDB client
//!
//! Read-only client for the public TheMealDB API. Two endpoints are used:
//! `search.php?s=<query>` and `lookup.php?i=<id>`, both returning a JSON
//! envelope whose `meals` field is either an array or `null`.
//!
//! The [`Meal`] record is deliberately loose — TheMealDB fields are all
//! optional strings apart from the id and name. `null` in the envelope means
//! "no matches" and maps to an empty list, never an error; only a
//! non-success HTTP status fails.
//!
//! The base URL is injectable ([`MealDbClient::with_base_url`]) so tests can
//! point the client at a local mock server. `PLATEFUL_MEALDB_URL` overrides
//! it at runtime.

use serde::{Deserialize, Serialize};

/// Default base URL of the public API, version 1 test key.
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// A meal record from TheMealDB, trimmed to the fields the UI renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
}

/// Response envelope: `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<Meal>>,
}

#[cfg(feature = "server")]
pub use client::{MealDbClient, MealDbError};

#[cfg(feature = "server")]
mod client {
    use super::{Meal, MealsEnvelope, MEALDB_BASE_URL};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum MealDbError {
        #[error("Failed to fetch meals")]
        SearchFailed(reqwest::StatusCode),
        #[error("Failed to fetch meal")]
        LookupFailed(reqwest::StatusCode),
        #[error(transparent)]
        Http(#[from] reqwest::Error),
    }

    #[derive(Debug, Clone)]
    pub struct MealDbClient {
        http: reqwest::Client,
        base_url: String,
    }

    impl MealDbClient {
        /// Client against the public API, unless `PLATEFUL_MEALDB_URL` says
        /// otherwise.
        pub fn new() -> Self {
            let base_url = std::env::var("PLATEFUL_MEALDB_URL")
                .unwrap_or_else(|_| MEALDB_BASE_URL.to_string());
            Self::with_base_url(base_url)
        }

        /// Client against an explicit base URL.
        pub fn with_base_url(base_url: impl Into<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        /// Search meals by name. An empty result set is `Ok(vec![])`.
        pub async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, MealDbError> {
            let url = format!("{}/search.php", self.base_url);
            let res = self.http.get(&url).query(&[("s", query)]).send().await?;
            if !res.status().is_success() {
                return Err(MealDbError::SearchFailed(res.status()));
            }
            let envelope: MealsEnvelope = res.json().await?;
            Ok(envelope.meals.unwrap_or_default())
        }

        /// Look up a single meal by id. Unknown ids are `Ok(None)`.
        pub async fn lookup_meal(&self, id: &str) -> Result<Option<Meal>, MealDbError> {
            let url = format!("{}/lookup.php", self.base_url);
            let res = self.http.get(&url).query(&[("i", id)]).send().await?;
            if !res.status().is_success() {
                return Err(MealDbError::LookupFailed(res.status()));
            }
            let envelope: MealsEnvelope = res.json().await?;
            Ok(envelope.meals.and_then(|mut meals| {
                if meals.is_empty() {
                    None
                } else {
                    Some(meals.remove(0))
                }
            }))
        }
    }

    impl Default for MealDbClient {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_deserializes_from_themealdb_shape() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx.jpg",
            "strInstructions": "Preheat oven to 350."
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
    }

    #[test]
    fn null_meals_envelope_is_empty() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }
}
