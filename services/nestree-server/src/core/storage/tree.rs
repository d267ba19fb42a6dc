//! Nested-set reads against the tree tables.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{any::AnyPoolOptions, AnyPool};

use crate::core::config::DatabaseConfig;
use crate::core::error::Result;
use crate::core::types::Node;

const NODE_EXISTS: &str = "SELECT idNode FROM node_tree WHERE idNode = ?";

const NODE_INFO: &str = "SELECT idNode, level, iLeft, iRight FROM node_tree WHERE idNode = ?";

const DESCENDANTS: &str = r#"
    SELECT idNode, level, iLeft, iRight
    FROM node_tree
    WHERE iLeft > ? AND iRight < ?
    ORDER BY iLeft
"#;

const DESCENDANTS_AT_LEVEL: &str = r#"
    SELECT idNode, level, iLeft, iRight
    FROM node_tree
    WHERE iLeft > ? AND iRight < ? AND level = ?
    ORDER BY iLeft
"#;

const COUNT_DESCENDANTS: &str = "SELECT COUNT(*) FROM node_tree WHERE iLeft > ? AND iRight < ?";

const NODE_NAME: &str = "SELECT nodeName FROM node_tree_names WHERE idNode = ? AND language = ?";

/// Read access to the nested-set tree
///
/// Every method reports backing-store faults as
/// [`NestreeError::StorageUnavailable`](crate::core::error::NestreeError::StorageUnavailable).
/// Missing rows are never errors at this level.
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// True iff a node with this id exists
    async fn node_exists(&self, node_id: i64) -> Result<bool>;

    /// Boundary markers and level of a node
    async fn find_node(&self, node_id: i64) -> Result<Option<Node>>;

    /// Strict descendants of `node`, ordered by `left`
    ///
    /// With `level` set, only descendants at exactly that level.
    async fn descendants(&self, node: &Node, level: Option<i64>) -> Result<Vec<Node>>;

    /// Number of strict descendants of `node`
    async fn count_descendants(&self, node: &Node) -> Result<i64>;

    /// Name of a node in `language`, if translated
    async fn node_name(&self, node_id: i64, language: &str) -> Result<Option<String>>;

    /// Round-trip to the backing store
    async fn ping(&self) -> Result<()>;
}

/// sqlx-backed tree store
#[derive(Clone)]
pub struct SqlTreeStore {
    pool: AnyPool,
}

impl SqlTreeStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool for the configured database
    ///
    /// In-memory SQLite databases are private to one connection, so the
    /// pool is pinned to a single long-lived connection for them.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        sqlx::any::install_default_drivers();

        let in_memory = is_in_memory_url(&config.url);
        let max_connections = if in_memory { 1 } else { config.max_connections };
        let mut options = AnyPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_sec));
        if in_memory {
            options = options.idle_timeout(None).max_lifetime(None);
        }

        let pool = options.connect(&config.url).await?;
        tracing::info!(max_connections, in_memory, "Database pool ready");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

fn is_in_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory:")
        || (url.starts_with("sqlite:") && url.contains("mode=memory"))
}

#[async_trait]
impl TreeStore for SqlTreeStore {
    async fn node_exists(&self, node_id: i64) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar(NODE_EXISTS)
            .bind(node_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn find_node(&self, node_id: i64) -> Result<Option<Node>> {
        let node = sqlx::query_as::<_, Node>(NODE_INFO)
            .bind(node_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(node)
    }

    async fn descendants(&self, node: &Node, level: Option<i64>) -> Result<Vec<Node>> {
        let query = match level {
            Some(level) => sqlx::query_as::<_, Node>(DESCENDANTS_AT_LEVEL)
                .bind(node.left)
                .bind(node.right)
                .bind(level),
            None => sqlx::query_as::<_, Node>(DESCENDANTS)
                .bind(node.left)
                .bind(node.right),
        };

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn count_descendants(&self, node: &Node) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(COUNT_DESCENDANTS)
            .bind(node.left)
            .bind(node.right)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn node_name(&self, node_id: i64, language: &str) -> Result<Option<String>> {
        let name: Option<Option<String>> = sqlx::query_scalar(NODE_NAME)
            .bind(node_id)
            .bind(language)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name.flatten())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
