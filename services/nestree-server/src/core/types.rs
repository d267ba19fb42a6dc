//! Core data types for the nestree service.
//!
//! This module defines the tree rows read from storage, the summaries
//! returned to clients, the request error codes and the response
//! bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the `node_tree` table
///
/// `left` and `right` are the nested-set boundary markers. A node N is
/// a descendant of M iff `M.left < N.left && N.right < M.right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct Node {
    #[sqlx(rename = "idNode")]
    pub id: i64,

    /// Depth from the root
    pub level: i64,

    #[sqlx(rename = "iLeft")]
    pub left: i64,

    #[sqlx(rename = "iRight")]
    pub right: i64,
}

impl Node {
    /// True when `other` lies strictly inside this node's interval
    pub fn contains(&self, other: &Node) -> bool {
        self.left < other.left && other.right < self.right
    }
}

/// A child of the requested node, as returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSummary {
    pub node_id: i64,

    /// Name in the requested language, `null` when no translation exists
    pub name: Option<String>,

    /// Number of strict descendants of this child
    pub children_count: i64,
}

/// Error codes reported in the `error` field of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingParameter,
    InvalidNode,
    WrongLanguage,
    InvalidPageNumber,
    InvalidPageSize,
    StorageUnavailable,
}

impl ErrorCode {
    /// Wire string for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingParameter => "Missing mandatory params",
            ErrorCode::InvalidNode => "Invalid node id",
            ErrorCode::WrongLanguage => "Wrong language",
            ErrorCode::InvalidPageNumber => "Invalid page number requested",
            ErrorCode::InvalidPageSize => "Invalid page size requested",
            ErrorCode::StorageUnavailable => "Storage unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Body of every children response
///
/// `error` is the empty string on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildrenResponse {
    pub nodes: Vec<ChildSummary>,
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// "ok" or "unavailable"
    pub database: String,
}
