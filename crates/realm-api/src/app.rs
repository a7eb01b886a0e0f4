//! Application builder: wires router, middleware and state into an Axum app.

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(request_logging))
}
