//! Core library for db2struct.
//!
//! Reads table definitions from a MySQL database and turns each table into a
//! Go source file that declares one struct with `orm:"..."` field tags.
//!
//! # Pipeline
//! 1. A [`SchemaReader`] lists tables and describes their columns
//! 2. [`TableFilter`] selects which tables to generate
//! 3. [`mapping`] turns `DESCRIBE` rows into typed, tagged fields
//! 4. [`render`] lays the fields out as Go source
//! 5. [`OutputTarget`] writes `<dir>/<table>.go`
//!
//! [`Generator`] drives the steps for a whole database.
//!
//! # Security Guarantees
//! - Only `SHOW TABLES` and `DESCRIBE` are issued, on a read-only session
//! - Connection strings are redacted before they reach logs or errors

pub mod adapters;
pub mod emit;
pub mod error;
pub mod filter;
pub mod generator;
pub mod logging;
pub mod mapping;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use adapters::{ConnectionConfig, SchemaReader, StaticSchema, create_reader};
pub use emit::OutputTarget;
pub use error::{Db2StructError, Result};
pub use filter::TableFilter;
pub use generator::{GenerationReport, Generator, GeneratorConfig};
pub use logging::init_logging;
pub use mapping::{map_column, map_table, to_camel_case};
pub use models::{ColumnMetadata, FieldSpec, GoType, KeyKind, OrmTag, TableSpec, TagSet};
