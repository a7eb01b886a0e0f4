//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use realm_api::{AppState, build_app};
use realm_core::config::{AppConfig, DatabaseBackend, LogFormat};
use realm_database::Repositories;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// Status and decoded JSON body of a test response.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed body, `Null` if empty or not JSON
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.logging.format = LogFormat::Pretty;

        let router = build_app(AppState::new(config.clone(), Repositories::memory()));

        Self { router, config }
    }

    /// Register a user, asserting success
    pub async fn sign_up(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/users/sign-up",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.data().clone()
    }

    /// Sign in and return the full `Authorization` header value
    pub async fn sign_in(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/users/sign-in",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.data()["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    /// Register and sign in, returning the `Authorization` header value
    pub async fn register(&self, email: &str) -> String {
        self.sign_up(email, "secret1").await;
        self.sign_in(email, "secret1").await
    }

    /// Send a request; `authorization` is used verbatim as the header value
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
