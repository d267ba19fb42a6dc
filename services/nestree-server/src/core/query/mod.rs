//! Tree query module.
//!
//! Turns a validated request into a page of child summaries: node
//! existence check, nested-set descendant lookup, per-child counts and
//! names, then keyword filtering and pagination.

mod engine;
mod page;

pub use engine::{ChildrenOutcome, TreeQueryEngine};
pub use page::{filter_by_keyword, paginate};
