//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // POST-only routes answer other methods with a JSON 405.
    let api_routes = Router::new()
        .route(
            "/api/chat",
            post(handlers::chat::post_chat).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/ask",
            post(handlers::ask::post_ask).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/render",
            post(handlers::render::post_render).fallback(handlers::method_not_allowed),
        )
        .route("/api/status", get(handlers::status::get_status));

    let [csp, nosniff, frame_options] = security::header_layers();

    Router::new()
        .merge(api_routes)
        .merge(static_files::static_router())
        .layer(
            ServiceBuilder::new()
                .layer(csp)
                .layer(nosniff)
                .layer(frame_options),
        )
        .with_state(state)
}
