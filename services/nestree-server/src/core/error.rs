//! Error types and error handling for the nestree service.
//!
//! This module defines the fatal error types used throughout the
//! application. Request validation problems are not errors here: they
//! are collected as [`ErrorCode`](crate::core::types::ErrorCode)
//! values and reported in a normal response. HTTP status mapping is
//! handled in the http adapter.

use thiserror::Error;

/// Result type alias for nestree operations
pub type Result<T> = std::result::Result<T, NestreeError>;

/// Main error type for the nestree service
#[derive(Error, Debug)]
pub enum NestreeError {
    #[error("Node not found: {0}")]
    NodeNotFound(i64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<sqlx::Error> for NestreeError {
    fn from(err: sqlx::Error) -> Self {
        NestreeError::StorageUnavailable(err.to_string())
    }
}

impl NestreeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, NestreeError::NodeNotFound(_))
    }

    /// Check if the backing store failed or could not be reached
    pub fn is_storage(&self) -> bool {
        matches!(self, NestreeError::StorageUnavailable(_))
    }

    /// Check if the request ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, NestreeError::Timeout(_))
    }
}
