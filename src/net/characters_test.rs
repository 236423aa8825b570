use super::*;
use crate::net::types::Gender;
use httpmock::prelude::*;
use serde_json::json;

fn api(server: &MockServer) -> CharactersApi {
    CharactersApi::new(reqwest::Client::new(), server.base_url())
}

fn rick() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "gender": "Male",
        "image": "https://example.test/rick.png"
    })
}

#[tokio::test]
async fn list_forwards_filters_as_query_params() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/api/character")
            .query_param("page", "2")
            .query_param("status", "alive")
            .query_param("gender", "male");
        then.status(200).json_body(json!({"results": [rick()]}));
    });

    let filters = CharacterFilters {
        page: Some(2),
        status: Some("alive".to_owned()),
        gender: Some(Gender::Male),
        ..CharacterFilters::default()
    };
    let characters = api(&server).list(&filters).await.expect("list succeeds");
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Rick Sanchez");
    listing.assert();
}

#[tokio::test]
async fn list_unwraps_the_results_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/character");
        then.status(200).json_body(json!({"results": []}));
    });

    let characters = api(&server)
        .list(&CharacterFilters::default())
        .await
        .expect("list succeeds");
    assert!(characters.is_empty());
}

#[tokio::test]
async fn list_error_carries_fixed_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/character");
        then.status(503).body("down for maintenance");
    });

    let err = api(&server)
        .list(&CharacterFilters::default())
        .await
        .expect_err("list fails");
    assert_eq!(err.to_string(), "could not get characters");
}
