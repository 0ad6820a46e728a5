//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the shop
//! GET  /shop                   - Product listing (cat, name, type, min, max, sort, page)
//! GET  /health                 - Health check
//! GET  /static/*               - Static assets
//! ```

pub mod shop;

use axum::{Router, middleware, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Directory holding CSS and placeholder images.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::home))
        .route("/shop", get(shop::index))
}

/// Build the complete application router with its middleware stack.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog.
async fn health() -> &'static str {
    "ok"
}
