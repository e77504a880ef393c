//! Overland Parts admin library.
//!
//! This crate provides the back-office functionality as a library,
//! allowing it to be tested and reused. [`app`] builds the complete
//! router; the binary in `main.rs` only adds process concerns (Sentry,
//! tracing, the listener).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session_store;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the admin application router.
///
/// Layer order matters: the request ID middleware runs before the session
/// layer, and the security headers middleware runs last so every page
/// response carries the fixed CSP. The `/static` tree is merged outside
/// the page middleware so asset responses keep their cache headers.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    let pages = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware));

    pages
        .nest_service("/static", ServeDir::new("crates/admin/static"))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
