//! Unified service container for nestree
//!
//! Provides shared access to all core services. Everything is built
//! explicitly from a [`Config`] and a store handle.

use crate::core::config::Config;
use crate::core::error::{NestreeError, Result};
use crate::core::params::ParameterResolver;
use crate::core::query::TreeQueryEngine;
use crate::core::storage::{schema, SqlTreeStore, TreeStore};
use crate::core::types::ChildrenResponse;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Request parameter schema
    pub resolver: Arc<ParameterResolver>,

    /// Nested-set query engine
    pub engine: Arc<TreeQueryEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services over an existing store
    pub fn new(config: Config, store: Arc<dyn TreeStore>) -> Self {
        let resolver = Arc::new(ParameterResolver::from_config(&config));
        let engine = Arc::new(TreeQueryEngine::new(store, config.query.descendant_scope));

        Self {
            resolver,
            engine,
            config: Arc::new(config),
        }
    }

    /// Open the configured database and create services over it
    pub async fn connect(config: Config) -> Result<Self> {
        let store = SqlTreeStore::connect(&config.database).await?;

        if config.database.bootstrap_schema {
            schema::bootstrap(store.pool()).await?;
        }

        Ok(Self::new(config, Arc::new(store)))
    }

    /// Answer one children request
    ///
    /// Validation problems and missing nodes come back as a normal
    /// response. Store faults and timeouts are errors.
    pub async fn children(&self, raw: &HashMap<String, String>) -> Result<ChildrenResponse> {
        let params = match self.resolver.resolve(raw).into_result() {
            Ok(params) => params,
            Err(errors) => return Ok(ChildrenResponse::validation_failure(&errors)),
        };

        let timeout_sec = self.config.query.request_timeout_sec;
        let outcome = tokio::time::timeout(
            Duration::from_secs(timeout_sec),
            self.engine.list_children(&params),
        )
        .await
        .map_err(|_| NestreeError::Timeout(timeout_sec))??;

        Ok(outcome.into())
    }

    /// True when the backing store answers
    pub async fn database_ok(&self) -> bool {
        match self.engine.store().ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}
