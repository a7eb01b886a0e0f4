//! Integration tests for character inventories.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_inventory_follows_character_ownership() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    let character = app
        .request(
            "POST",
            "/api/characters",
            Some(json!({ "name": "Aria" })),
            Some(&alice),
        )
        .await;
    let path = format!(
        "/api/characters/{}/inventory",
        character.data()["id"].as_str().unwrap()
    );
    let potion = json!({ "name": "Potion", "attributes": { "heal": 50 } });

    let added = app.request("POST", &path, Some(potion.clone()), Some(&alice)).await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.data()["attributes"]["heal"], 50);

    let denied = app.request("POST", &path, Some(potion), Some(&bob)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let own = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(own.data()[0]["attributes"]["heal"], 50);

    let theirs = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(theirs.status, StatusCode::OK);
    assert_eq!(theirs.data()[0]["name"], "Potion");
    assert!(theirs.data()[0].get("attributes").is_none());
}

#[tokio::test]
async fn test_inventory_of_missing_character() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let path = "/api/characters/00000000-0000-0000-0000-000000000000/inventory";

    let listed = app.request("GET", path, None, Some(&alice)).await;
    assert_eq!(listed.status, StatusCode::NOT_FOUND);

    let added = app
        .request("POST", path, Some(json!({ "name": "Potion" })), Some(&alice))
        .await;
    assert_eq!(added.status, StatusCode::NOT_FOUND);
}
