//! `SHOW TABLES` and `DESCRIBE` queries.
//!
//! Both statements are sent over the text protocol (`raw_sql`), since
//! not every server accepts them as prepared statements.

use crate::adapters::helpers::RowExt;
use crate::{Result, error::Db2StructError, models::ColumnMetadata};
use sqlx::MySqlPool;

/// Lists the tables of the current database in server order.
pub(crate) async fn show_tables(pool: &MySqlPool) -> Result<Vec<String>> {
    let rows = sqlx::raw_sql("SHOW TABLES")
        .fetch_all(pool)
        .await
        .map_err(|e| Db2StructError::introspection_failed("SHOW TABLES", e))?;

    let tables = rows
        .iter()
        .map(|row| row.get_text_at(0, None))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("SHOW TABLES returned {} tables", tables.len());
    Ok(tables)
}

/// Describes one table, one [`ColumnMetadata`] per column in declaration order.
pub(crate) async fn describe_table(pool: &MySqlPool, table: &str) -> Result<Vec<ColumnMetadata>> {
    let sql = describe_statement(table);
    let rows = sqlx::raw_sql(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| Db2StructError::introspection_failed(sql.clone(), e))?;

    let columns = rows
        .iter()
        .map(|row| {
            Ok(ColumnMetadata {
                field: row.get_text("Field", Some(table))?,
                sql_type: row.get_text("Type", Some(table))?,
                null: row.get_text("Null", Some(table))?,
                key: row.get_text("Key", Some(table))?,
                default: row.get_text("Default", Some(table))?,
                extra: row.get_text("Extra", Some(table))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("DESCRIBE `{}` returned {} columns", table, columns.len());
    Ok(columns)
}

/// Builds ``DESCRIBE `table` `` with backticks in the name doubled.
pub(crate) fn describe_statement(table: &str) -> String {
    format!("DESCRIBE `{}`", table.replace('`', "``"))
}
