//! Integration tests for characters and field-level visibility.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_owner_sees_money_and_stranger_does_not() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    let created = app
        .request(
            "POST",
            "/api/characters",
            Some(json!({ "name": "Aria" })),
            Some(&alice),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["health"], 500);
    assert_eq!(created.data()["power"], 100);
    assert_eq!(created.data()["money"], 10000);

    let path = format!("/api/characters/{}", created.data()["id"].as_str().unwrap());

    let own = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.data()["money"], 10000);

    let theirs = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(theirs.status, StatusCode::OK);
    assert_eq!(theirs.data()["name"], "Aria");
    assert_eq!(theirs.data()["health"], 500);
    assert!(theirs.data().get("money").is_none());
}

#[tokio::test]
async fn test_duplicate_name_per_owner() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;
    let body = json!({ "name": "Aria" });

    let first = app
        .request("POST", "/api/characters", Some(body.clone()), Some(&alice))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let again = app
        .request("POST", "/api/characters", Some(body.clone()), Some(&alice))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let other_owner = app
        .request("POST", "/api/characters", Some(body), Some(&bob))
        .await;
    assert_eq!(other_owner.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_owner_id_in_body_is_ignored() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let me = app.request("GET", "/api/users/me", None, Some(&alice)).await;

    let created = app
        .request(
            "POST",
            "/api/characters",
            Some(json!({ "name": "Aria", "owner_id": "00000000-0000-0000-0000-000000000000" })),
            Some(&alice),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["owner_id"], me.data()["id"]);
}

#[tokio::test]
async fn test_delete_requires_ownership() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    let created = app
        .request(
            "POST",
            "/api/characters",
            Some(json!({ "name": "Aria" })),
            Some(&alice),
        )
        .await;
    let path = format!("/api/characters/{}", created.data()["id"].as_str().unwrap());

    let denied = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let deleted = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects_per_row_and_paginates() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    let bob = app.register("b@x.com").await;

    for name in ["A1", "A2"] {
        app.request("POST", "/api/characters", Some(json!({ "name": name })), Some(&alice))
            .await;
    }
    app.request("POST", "/api/characters", Some(json!({ "name": "B1" })), Some(&bob))
        .await;

    let page = app
        .request("GET", "/api/characters?page=1&page_size=2", None, Some(&alice))
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.data()["total_items"], 3);
    assert_eq!(page.data()["items"].as_array().unwrap().len(), 2);
    assert_eq!(page.data()["has_next"], true);

    let all = app.request("GET", "/api/characters", None, Some(&alice)).await;
    for row in all.data()["items"].as_array().unwrap() {
        let mine = row["name"].as_str().unwrap().starts_with('A');
        assert_eq!(row.get("money").is_some(), mine, "{row}");
    }
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;

    let missing = app
        .request(
            "GET",
            "/api/characters/00000000-0000-0000-0000-000000000000",
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/api/characters/not-a-uuid", None, Some(&alice))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
    assert!(malformed.body["message"].is_string());
}

#[tokio::test]
async fn test_page_far_past_the_end() {
    let app = TestApp::new();
    let alice = app.register("a@x.com").await;
    app.request("POST", "/api/characters", Some(json!({ "name": "Aria" })), Some(&alice))
        .await;

    for path in [
        "/api/characters?page=18446744073709551615&page_size=100",
        "/api/items?page=18446744073709551615&page_size=100",
    ] {
        let response = app.request("GET", path, None, Some(&alice)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.data()["items"].as_array().unwrap().is_empty());
        assert_eq!(response.data()["has_next"], false);
    }
}
