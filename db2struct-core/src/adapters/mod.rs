//! Schema readers: the introspection side of the pipeline.
//!
//! A [`SchemaReader`] answers two questions: which tables exist, and what
//! columns a table has. The database handle is owned by the reader that is
//! passed into the generator, so tests can substitute [`StaticSchema`].
//!
//! # Module Structure
//! - `config`: connection configuration
//! - `helpers`: row decoding helpers
//! - `memory`: in-memory schema source
//! - `mysql`: MySQL reader (`SHOW TABLES` / `DESCRIBE`)

use crate::{Result, models::ColumnMetadata};
use async_trait::async_trait;

pub mod config;
#[cfg(feature = "mysql")]
pub mod helpers;
pub mod memory;
#[cfg(feature = "mysql")]
pub mod mysql;

pub use config::ConnectionConfig;
pub use memory::StaticSchema;

/// Source of table names and column metadata.
///
/// Implementations return tables and columns in the order the database
/// reports them; callers rely on that order for reproducible output.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// Lists all table names in the configured database.
    ///
    /// # Errors
    /// Any failure is fatal to the run; no partial list is returned.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Describes one table's columns in declaration order.
    ///
    /// # Errors
    /// Returns an error if the table cannot be described.
    async fn describe_table(&self, table: &str) -> Result<Vec<ColumnMetadata>>;

    /// Human-readable, credential-free description of the source for logs.
    fn source_description(&self) -> String;
}

/// Creates a schema reader from a connection string.
///
/// Accepts `mysql://` URLs and go-sql-driver style DSNs such as
/// `root:pass@tcp(127.0.0.1:3306)/test`.
///
/// # Errors
/// Returns error if the connection string is invalid, the MySQL driver is
/// not compiled in, or the server cannot be reached.
pub async fn create_reader(connection_string: &str) -> Result<Box<dyn SchemaReader>> {
    #[cfg(feature = "mysql")]
    {
        let reader = mysql::MySqlSchemaReader::connect(connection_string).await?;
        Ok(Box::new(reader))
    }
    #[cfg(not(feature = "mysql"))]
    {
        let _ = connection_string;
        Err(crate::error::Db2StructError::configuration(
            "MySQL support not compiled in. Compile with --features mysql",
        ))
    }
}
