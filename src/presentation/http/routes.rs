//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(thread_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Thread and comment routes; only reading a thread is public
fn thread_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/threads", post(handlers::thread::post_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comment::post_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comment::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/threads/{thread_id}", get(handlers::thread::get_thread_detail))
        .merge(protected)
}
