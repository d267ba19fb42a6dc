//! HTTP request handlers for the nestree API
//!
//! Implements the health check and the children listing.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::NestreeError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status, version and whether the database answers.
pub async fn health_handler(State(services): State<Arc<Services>>) -> Json<HealthResponse> {
    let database = if services.database_ok().await {
        "ok"
    } else {
        "unavailable"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}

/// Children listing handler
///
/// Reads `node_id`, `language`, `search_keyword`, `page_num` and
/// `page_size` from the query string and returns one page of the
/// node's descendants.
///
/// # Returns
///
/// `200` with `{ nodes, error }`; `error` carries the first validation
/// problem or `Invalid node id` when the node does not exist.
///
/// # Errors
///
/// - `StorageUnavailable` (503): the database failed
/// - `Timeout` (504): the store work exceeded the request timeout
pub async fn children_handler(
    State(services): State<Arc<Services>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ChildrenResponse>, NestreeError> {
    let response = services.children(&raw).await?;
    Ok(Json(response))
}
