//! Response assembly.
//!
//! Every outcome of a children request, including failures, is
//! reported through the same `{ nodes, error }` body.

use crate::core::params::ResolutionErrors;
use crate::core::query::ChildrenOutcome;
use crate::core::types::{ChildSummary, ChildrenResponse, ErrorCode};

impl ChildrenResponse {
    /// A page of children with an empty error
    pub fn success(nodes: Vec<ChildSummary>) -> Self {
        Self {
            nodes,
            error: String::new(),
        }
    }

    /// No nodes, the given error code
    pub fn failure(code: ErrorCode) -> Self {
        Self {
            nodes: Vec::new(),
            error: code.as_str().to_string(),
        }
    }

    /// Report the primary code of a rejected request
    pub fn validation_failure(errors: &ResolutionErrors) -> Self {
        Self::failure(errors.primary)
    }

    pub fn invalid_node() -> Self {
        Self::failure(ErrorCode::InvalidNode)
    }

    pub fn storage_unavailable() -> Self {
        Self::failure(ErrorCode::StorageUnavailable)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}

impl From<ChildrenOutcome> for ChildrenResponse {
    fn from(outcome: ChildrenOutcome) -> Self {
        match outcome {
            ChildrenOutcome::Page(nodes) => Self::success(nodes),
            ChildrenOutcome::InvalidNode => Self::invalid_node(),
        }
    }
}
