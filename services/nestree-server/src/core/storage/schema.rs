//! Table bootstrap for the tree store.
//!
//! The service never writes tree rows. These statements only create
//! the tables when they are missing, for local setups and tests.

use sqlx::AnyPool;

use crate::core::error::Result;

const CREATE_NODE_TREE: &str = r#"
    CREATE TABLE IF NOT EXISTS node_tree (
        idNode INTEGER NOT NULL PRIMARY KEY,
        level INTEGER NOT NULL,
        iLeft INTEGER NOT NULL,
        iRight INTEGER NOT NULL
    )
"#;

const CREATE_NODE_TREE_NAMES: &str = r#"
    CREATE TABLE IF NOT EXISTS node_tree_names (
        idNode INTEGER NOT NULL,
        language VARCHAR(32) NOT NULL,
        nodeName VARCHAR(255) NOT NULL,
        PRIMARY KEY (idNode, language),
        FOREIGN KEY (idNode) REFERENCES node_tree (idNode)
    )
"#;

/// Create `node_tree` and `node_tree_names` if they do not exist
pub async fn bootstrap(pool: &AnyPool) -> Result<()> {
    for statement in [CREATE_NODE_TREE, CREATE_NODE_TREE_NAMES] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Tree schema ready");
    Ok(())
}
