//! MySQL schema reader.
//!
//! # Module Structure
//! - `dsn`: go-sql-driver DSN to URL normalization
//! - `connection`: connection string parsing and pool setup
//! - `introspection`: `SHOW TABLES` and `DESCRIBE` queries
//!
//! All statements are read-only and run over a single connection.

pub mod connection;
pub mod dsn;
pub mod introspection;


use super::{ConnectionConfig, SchemaReader};
use crate::Result;
use crate::models::ColumnMetadata;
use async_trait::async_trait;
use sqlx::MySqlPool;

pub use connection::{parse_mysql_connection_config, validate_mysql_connection_string};
pub use dsn::normalize_connection_string;

/// Schema reader over one MySQL connection.
pub struct MySqlSchemaReader {
    /// Single-connection pool shared by every introspection query
    pool: MySqlPool,
    /// Connection configuration (credential-free)
    config: ConnectionConfig,
}

impl std::fmt::Debug for MySqlSchemaReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSchemaReader")
            .field("config", &self.config)
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

impl MySqlSchemaReader {
    /// Wraps an existing pool. The pool's current database is the one whose
    /// tables are listed.
    pub fn from_pool(pool: MySqlPool, config: ConnectionConfig) -> Self {
        Self { pool, config }
    }

    /// Connection configuration this reader was created with.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Closes the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SchemaReader for MySqlSchemaReader {
    async fn list_tables(&self) -> Result<Vec<String>> {
        introspection::show_tables(&self.pool).await
    }

    async fn describe_table(&self, table: &str) -> Result<Vec<ColumnMetadata>> {
        introspection::describe_table(&self.pool, table).await
    }

    fn source_description(&self) -> String {
        format!("MySQL {}", self.config)
    }
}
