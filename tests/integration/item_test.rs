//! Integration tests for items.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn sword() -> serde_json::Value {
    json!({
        "item_code": 1,
        "name": "Sword",
        "ability": { "power": 5 },
        "price": 300
    })
}

#[tokio::test]
async fn test_items_are_public_to_read() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    let created = app.request("POST", "/api/items", Some(sword()), Some(&alice)).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let path = format!("/api/items/{}", created.data()["id"].as_str().unwrap());
    let seen = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(seen.status, StatusCode::OK);
    assert_eq!(seen.data()["price"], 300);
    assert_eq!(seen.data()["ability"]["power"], 5);

    let listed = app.request("GET", "/api/items", None, Some(&bob)).await;
    assert_eq!(listed.data()["total_items"], 1);
}

#[tokio::test]
async fn test_item_code_unique_per_owner() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    app.request("POST", "/api/items", Some(sword()), Some(&alice)).await;
    let again = app.request("POST", "/api/items", Some(sword()), Some(&alice)).await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let other = app.request("POST", "/api/items", Some(sword()), Some(&bob)).await;
    assert_eq!(other.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_only_owner_updates_and_code_is_immutable() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    let created = app.request("POST", "/api/items", Some(sword()), Some(&alice)).await;
    let path = format!("/api/items/{}", created.data()["id"].as_str().unwrap());

    let denied = app
        .request("PUT", &path, Some(json!({ "price": 1 })), Some(&bob))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let updated = app
        .request("PUT", &path, Some(json!({ "price": 250, "name": "Blade" })), Some(&alice))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["price"], 250);
    assert_eq!(updated.data()["name"], "Blade");
    assert_eq!(updated.data()["item_code"], 1);

    let recode = app
        .request("PUT", &path, Some(json!({ "item_code": 2 })), Some(&alice))
        .await;
    assert_eq!(recode.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;

    let mut body = sword();
    body["price"] = json!(-1);
    let response = app.request("POST", "/api/items", Some(body), Some(&alice)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_item_id_uses_error_body() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;

    for method in ["GET", "PUT"] {
        let body = (method == "PUT").then(|| json!({ "price": 1 }));
        let response = app.request(method, "/api/items/42", body, Some(&alice)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}
