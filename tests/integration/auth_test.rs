//! Integration tests for registration, sign-in and the bearer gate.

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use realm_auth::jwt::TokenCodec;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_sign_up_returns_account_without_hash() {
    let app = TestApp::new();
    let data = app.sign_up("a@x.com", "secret1").await;

    assert_eq!(data["email"], "a@x.com");
    assert!(data.get("id").is_some());
    assert!(data.get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.sign_up("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/users/sign-up",
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_sign_up_validates_input() {
    let app = TestApp::new();

    for body in [
        json!({ "email": "not-an-email", "password": "secret1" }),
        json!({ "email": "a@x.com", "password": "12345" }),
        json!({ "email": "a@x.com" }),
        json!({
            "email": format!("{}@{}.com", "a".repeat(60), vec!["b".repeat(60); 4].join(".")),
            "password": "secret1"
        }),
    ] {
        let response = app.request("POST", "/api/users/sign-up", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    }
}

#[tokio::test]
async fn test_sign_in_returns_bearer_token() {
    let app = TestApp::new();
    app.sign_up("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/users/sign-in",
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.data()["token"].as_str().unwrap();
    assert!(token.starts_with("Bearer "));
    assert!(response.data()["expires_at"].is_string());
}

#[tokio::test]
async fn test_bad_password_and_unknown_email_look_the_same() {
    let app = TestApp::new();
    app.sign_up("a@x.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/users/sign-in",
            Some(json!({ "email": "a@x.com", "password": "wrong-pass" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/users/sign-in",
            Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let app = TestApp::new();
    let token = app.register("a@x.com").await;

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"], "a@x.com");

    let bare = token.trim_start_matches("Bearer ");
    for header in [None, Some(bare), Some("Bearer "), Some("Bearer garbage")] {
        let response = app.request("GET", "/api/users/me", None, header).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header:?}");
        assert_eq!(response.body["message"], "Authentication required");
    }
}

#[tokio::test]
async fn test_expired_and_orphaned_tokens_rejected() {
    let app = TestApp::new();
    let data = app.sign_up("a@x.com", "secret1").await;
    let user_id: Uuid = data["id"].as_str().unwrap().parse().unwrap();
    let codec = TokenCodec::new(&app.config.auth);

    let expired = codec
        .issue_at(user_id, Utc::now() - Duration::hours(2))
        .unwrap();
    let response = app
        .request(
            "GET",
            "/api/users/me",
            None,
            Some(&format!("Bearer {}", expired.token)),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let orphan = codec.issue(Uuid::new_v4()).unwrap();
    let response = app
        .request(
            "GET",
            "/api/users/me",
            None,
            Some(&format!("Bearer {}", orphan.token)),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_another_secret_rejected() {
    let app = TestApp::new();
    let data = app.sign_up("a@x.com", "secret1").await;
    let user_id: Uuid = data["id"].as_str().unwrap().parse().unwrap();

    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "someone-else".to_string();
    let token = TokenCodec::new(&foreign).issue(user_id).unwrap().token;

    let response = app
        .request("GET", "/api/users/me", None, Some(&format!("Bearer {token}")))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
