//! nestree - Nested-Set Tree Children Service
//!
//! A read-only HTTP service over a tree stored in a relational
//! database with the nested-set model. Given a node it lists the nodes
//! below it with their localized names and descendant counts,
//! optionally filtered by keyword and paginated.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - validator, params (request validation)
//!   - storage (sqlx tree store, schema bootstrap)
//!   - query (nested-set engine, filtering, pagination)
//!   - response, services
//!
//! - **http**: REST API adapter (depends on core)
//!   - router, handlers, middleware, error mapping

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{NestreeError, Result};
pub use crate::core::services::Services;
pub use crate::core::storage::{SqlTreeStore, TreeStore};
pub use crate::core::types::*;
