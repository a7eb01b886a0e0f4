//! Route definitions for the Realm HTTP API.
//!
//! All routes are mounted under `/api`. Routes outside `public_routes`
//! sit behind the `require_auth` middleware.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with state applied.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(user_routes())
        .merge(character_routes())
        .merge(item_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let api_routes = Router::new().merge(public_routes()).merge(protected);

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Endpoints reachable without a credential.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users/sign-up", post(handlers::users::sign_up))
        .route("/users/sign-in", post(handlers::users::sign_in))
        .route("/health", get(handlers::health::health))
}

/// Account endpoints for the signed-in user.
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/me", get(handlers::users::me))
}

/// Characters and their inventories.
fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/characters",
            post(handlers::characters::create_character).get(handlers::characters::list_characters),
        )
        .route(
            "/characters/{id}",
            get(handlers::characters::get_character).delete(handlers::characters::delete_character),
        )
        .route(
            "/characters/{id}/inventory",
            post(handlers::inventory::add_entry).get(handlers::inventory::list_entries),
        )
}

/// Item catalog.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            post(handlers::items::create_item).get(handlers::items::list_items),
        )
        .route(
            "/items/{id}",
            get(handlers::items::get_item).put(handlers::items::update_item),
        )
}
