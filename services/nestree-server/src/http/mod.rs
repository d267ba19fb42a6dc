//! HTTP REST adapter
//!
//! Depends only on core/.
//!
//! Provides the children endpoint and a health check via the Axum
//! web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

pub use handlers::*;

/// Build the application router over shared services
///
/// The children listing is served both under the versioned API path
/// and at the root for clients of the unversioned endpoint.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/", get(handlers::children_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/v1/children", get(handlers::children_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
