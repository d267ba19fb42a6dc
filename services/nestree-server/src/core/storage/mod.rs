//! Storage layer for the nested-set tree.
//!
//! The tree lives in two relational tables, read through a sqlx
//! connection pool:
//!
//! ```text
//! node_tree(idNode PK, level, iLeft, iRight)
//! node_tree_names(idNode FK, language, nodeName)   unique (idNode, language)
//! ```
//!
//! # Architecture
//!
//! - **TreeStore**: read operations the query engine depends on
//! - **SqlTreeStore**: sqlx implementation over MySQL or SQLite
//! - **schema**: idempotent table bootstrap

pub mod schema;
mod tree;

pub use tree::{SqlTreeStore, TreeStore};
