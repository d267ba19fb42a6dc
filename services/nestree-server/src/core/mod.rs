//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG config directory handling
//! - **validator**: Primitive input predicates
//! - **params**: Request parameter resolution
//! - **storage**: sqlx access to the nested-set tables
//! - **query**: Child listing, keyword filter, pagination
//! - **response**: Response body assembly
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod params;
pub mod query;
pub mod response;
pub mod services;
pub mod storage;
pub mod types;
pub mod validator;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{NestreeError, Result};
pub use services::Services;
