//! In-memory schema source.
//!
//! `StaticSchema` holds tables and their `DESCRIBE` rows directly. It backs
//! the generator tests and can be loaded from a JSON document of the form
//! `[{"name": "user", "columns": [{"Field": "id", "Type": "int(11)", ...}]}]`.

use super::SchemaReader;
use crate::{Result, error::Db2StructError, models::ColumnMetadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One table of a [`StaticSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTable {
    /// Table name
    pub name: String,
    /// `DESCRIBE` rows in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
}

/// Schema source backed by values in memory, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticSchema {
    tables: Vec<StaticTable>,
}

impl StaticSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a table.
    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        self.tables.push(StaticTable {
            name: name.into(),
            columns,
        });
        self
    }

    /// Parses a schema from its JSON form.
    ///
    /// # Errors
    /// Returns a configuration error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            Db2StructError::configuration(format!("Invalid schema document: {}", e))
        })
    }

    /// Tables in insertion order.
    pub fn tables(&self) -> &[StaticTable] {
        &self.tables
    }
}

#[async_trait]
impl SchemaReader for StaticSchema {
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn describe_table(&self, table: &str) -> Result<Vec<ColumnMetadata>> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| Db2StructError::TableNotFound {
                table: table.to_string(),
            })
    }

    fn source_description(&self) -> String {
        format!("in-memory schema ({} tables)", self.tables.len())
    }
}
