//! HTTP status mapping for fatal errors.
//!
//! Failures keep the `{ nodes, error }` body shape so clients can
//! parse every response the same way. Store details are logged, not
//! returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::NestreeError;
use crate::core::types::{ChildrenResponse, ErrorCode};

/// Status code for a fatal error
pub fn status_code(err: &NestreeError) -> StatusCode {
    match err {
        NestreeError::NodeNotFound(_) => StatusCode::NOT_FOUND,
        NestreeError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        NestreeError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        NestreeError::ConfigError(_) | NestreeError::IoError(_) | NestreeError::TomlError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for NestreeError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        tracing::error!(status = %status.as_u16(), "Request aborted: {}", self);

        let body = match &self {
            NestreeError::StorageUnavailable(_) => ChildrenResponse::storage_unavailable(),
            NestreeError::NodeNotFound(_) => ChildrenResponse::failure(ErrorCode::InvalidNode),
            other => ChildrenResponse {
                nodes: Vec::new(),
                error: other.message(),
            },
        };

        (status, Json(body)).into_response()
    }
}
