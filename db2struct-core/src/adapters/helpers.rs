//! Helper utilities for decoding introspection rows.

use crate::{Result, error::Db2StructError};
use sqlx::{Row, mysql::MySqlRow};

/// Extension trait for reading metadata columns as text.
///
/// `SHOW` and `DESCRIBE` results may come back with binary collations
/// depending on server version, so values are decoded as raw bytes and then
/// converted. SQL `NULL` reads as the empty string.
///
/// # Example
/// ```rust,ignore
/// use db2struct_core::adapters::helpers::RowExt;
///
/// let field = row.get_text("Field", Some("user"))?;
/// let name = row.get_text_at(0, None)?;
/// ```
pub trait RowExt {
    /// Reads a named column as text with table context for errors.
    fn get_text(&self, field_name: &str, table_context: Option<&str>) -> Result<String>;

    /// Reads a column by position as text.
    fn get_text_at(&self, index: usize, table_context: Option<&str>) -> Result<String>;
}

impl RowExt for MySqlRow {
    fn get_text(&self, field_name: &str, table_context: Option<&str>) -> Result<String> {
        let raw: Option<Vec<u8>> = self
            .try_get(field_name)
            .map_err(|e| Db2StructError::parse_field(field_name, table_context, e))?;
        Ok(bytes_to_text(raw))
    }

    fn get_text_at(&self, index: usize, table_context: Option<&str>) -> Result<String> {
        let raw: Option<Vec<u8>> = self
            .try_get(index)
            .map_err(|e| Db2StructError::parse_field(&format!("#{}", index), table_context, e))?;
        Ok(bytes_to_text(raw))
    }
}

/// Converts an optional raw value to text, replacing invalid UTF-8.
pub fn bytes_to_text(raw: Option<Vec<u8>>) -> String {
    raw.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
