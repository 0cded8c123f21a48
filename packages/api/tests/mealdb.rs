//! Integration tests for the TheMealDB client using a wiremock mock server.
#![cfg(feature = "server")]

use api::mealdb::MealDbClient;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pasta_meal() -> serde_json::Value {
    json!({
        "idMeal": "52835",
        "strMeal": "Fettucine alfredo",
        "strCategory": "Pasta",
        "strArea": "Italian",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/0jv5gx.jpg",
        "strInstructions": "Melt butter, add cream, toss."
    })
}

#[tokio::test]
async fn search_returns_meals_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "pasta"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "meals": [pasta_meal()] })),
        )
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    let meals = client.search_meals("pasta").await.unwrap();

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, "52835");
    assert_eq!(meals[0].name, "Fettucine alfredo");
    assert_eq!(meals[0].category.as_deref(), Some("Pasta"));
    assert_eq!(meals[0].area.as_deref(), Some("Italian"));
}

#[tokio::test]
async fn search_with_no_matches_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    let meals = client.search_meals("zzzzz").await.unwrap();

    assert!(meals.is_empty());
}

#[tokio::test]
async fn search_fails_on_non_ok_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    let err = client.search_meals("pasta").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch meals");
}

#[tokio::test]
async fn lookup_returns_first_meal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52835"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "meals": [pasta_meal()] })),
        )
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    let meal = client.lookup_meal("52835").await.unwrap().unwrap();

    assert_eq!(meal.name, "Fettucine alfredo");
    assert_eq!(meal.instructions.as_deref(), Some("Melt butter, add cream, toss."));
}

#[tokio::test]
async fn lookup_unknown_id_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    assert!(client.lookup_meal("0").await.unwrap().is_none());
}

#[tokio::test]
async fn lookup_fails_on_non_ok_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = MealDbClient::with_base_url(mock_server.uri());
    let err = client.lookup_meal("52835").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch meal");
}
