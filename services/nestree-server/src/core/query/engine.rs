//! Nested-set child listing.
//!
//! The engine holds the store handle it was built with and issues one
//! descendant-range query per request plus one count query and one
//! name lookup per descendant.

use std::sync::Arc;
use std::time::Instant;

use crate::core::config::DescendantScope;
use crate::core::error::{NestreeError, Result};
use crate::core::params::ResolvedParams;
use crate::core::query::page::{filter_by_keyword, paginate};
use crate::core::storage::TreeStore;
use crate::core::types::{ChildSummary, Node};

/// Result of a child listing that passed parameter validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildrenOutcome {
    /// The requested page, possibly empty
    Page(Vec<ChildSummary>),
    /// The requested node does not exist
    InvalidNode,
}

/// Query engine over a [`TreeStore`]
#[derive(Clone)]
pub struct TreeQueryEngine {
    store: Arc<dyn TreeStore>,
    scope: DescendantScope,
}

impl TreeQueryEngine {
    pub fn new(store: Arc<dyn TreeStore>, scope: DescendantScope) -> Self {
        Self { store, scope }
    }

    pub fn store(&self) -> &Arc<dyn TreeStore> {
        &self.store
    }

    pub async fn node_exists(&self, node_id: i64) -> Result<bool> {
        self.store.node_exists(node_id).await
    }

    /// Level and boundary markers of a node
    ///
    /// # Errors
    ///
    /// - `NodeNotFound`: no row with this id
    /// - `StorageUnavailable`: the store failed
    pub async fn fetch_node_info(&self, node_id: i64) -> Result<Node> {
        self.store
            .find_node(node_id)
            .await?
            .ok_or(NestreeError::NodeNotFound(node_id))
    }

    /// Summaries of the nodes below `node_id`, ordered by left marker
    ///
    /// With the default [`DescendantScope::All`] every strict descendant
    /// is returned, at any depth, not only the immediate children.
    pub async fn fetch_children(&self, node_id: i64, language: &str) -> Result<Vec<ChildSummary>> {
        let start = Instant::now();
        let target = self.fetch_node_info(node_id).await?;

        let level = match self.scope {
            DescendantScope::All => None,
            DescendantScope::Direct => Some(target.level + 1),
        };
        let descendants = self.store.descendants(&target, level).await?;

        let mut children = Vec::with_capacity(descendants.len());
        for node in &descendants {
            let children_count = self.store.count_descendants(node).await?;
            let name = self.store.node_name(node.id, language).await?;

            children.push(ChildSummary {
                node_id: node.id,
                name,
                children_count,
            });
        }

        tracing::debug!(
            node_id,
            language,
            children = children.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fetched children"
        );

        Ok(children)
    }

    /// Full listing flow for validated parameters
    ///
    /// Existence check, fetch, keyword filter, then pagination.
    pub async fn list_children(&self, params: &ResolvedParams) -> Result<ChildrenOutcome> {
        if !self.node_exists(params.node_id).await? {
            tracing::debug!(node_id = params.node_id, "Requested node does not exist");
            return Ok(ChildrenOutcome::InvalidNode);
        }

        let children = self.fetch_children(params.node_id, &params.language).await?;
        let children = filter_by_keyword(children, &params.search_keyword);
        let page = paginate(children, params.page_num, params.page_size);

        Ok(ChildrenOutcome::Page(page))
    }
}
