//! Data models for schema introspection and code generation.
//!
//! [`ColumnMetadata`] is the raw `DESCRIBE` row as the server returns it.
//! [`FieldSpec`] and [`TableSpec`] are the derived, rendering-ready forms.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One row of `DESCRIBE <table>` output.
///
/// Field names serialize with the exact column names MySQL uses so that
/// fixture rows can be written as JSON objects copied from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name (`Field`)
    #[serde(rename = "Field")]
    pub field: String,
    /// Raw SQL type, including length or precision (`Type`)
    #[serde(rename = "Type")]
    pub sql_type: String,
    /// `"YES"` or `"NO"` (`Null`)
    #[serde(rename = "Null", default)]
    pub null: String,
    /// `""`, `"PRI"`, `"UNI"` or `"MUL"` (`Key`)
    #[serde(rename = "Key", default)]
    pub key: String,
    /// Default value, empty when the column has none (`Default`)
    #[serde(rename = "Default", default, deserialize_with = "null_as_empty")]
    pub default: String,
    /// Free-text flags such as `auto_increment` (`Extra`)
    #[serde(rename = "Extra", default)]
    pub extra: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ColumnMetadata {
    /// Creates column metadata for a nullable column with no key, default or extra flags.
    pub fn new(field: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sql_type: sql_type.into(),
            null: "YES".to_string(),
            ..Default::default()
        }
    }

    /// Builder method to mark the column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.null = "NO".to_string();
        self
    }

    /// Builder method to set the raw `Key` value.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Builder method to set the raw `Default` value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Builder method to set the raw `Extra` value.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    /// Returns the typed key classification of this column.
    pub fn key_kind(&self) -> KeyKind {
        KeyKind::parse(&self.key)
    }

    /// A column is non-nullable only when `Null` is exactly `"NO"`.
    pub fn is_not_null(&self) -> bool {
        self.null == "NO"
    }

    /// Whether `Extra` flags the column as auto-increment.
    pub fn is_auto_increment(&self) -> bool {
        self.extra.contains("auto_increment")
    }
}

/// Index classification reported in the `Key` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `PRI`
    Primary,
    /// `UNI`
    Unique,
    /// `MUL` (non-unique index)
    Multiple,
    /// Empty or unrecognized
    None,
}

impl KeyKind {
    /// Parses the raw `Key` value; anything unrecognized is [`KeyKind::None`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PRI" => Self::Primary,
            "UNI" => Self::Unique,
            "MUL" => Self::Multiple,
            _ => Self::None,
        }
    }
}

/// Go types a column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    /// `int`
    Int,
    /// `int64`
    Int64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `string`
    String,
    /// `[]uint8`
    Bytes,
    /// `bool`
    Bool,
    /// `time.Time`
    Time,
    /// `sql.NullString`, used for nullable string columns
    NullString,
}

impl GoType {
    /// The Go spelling of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "[]uint8",
            Self::Bool => "bool",
            Self::Time => "time.Time",
            Self::NullString => "sql.NullString",
        }
    }

    /// `string` and `sql.NullString` both hold text; their defaults are quoted.
    pub fn is_string_like(self) -> bool {
        matches!(self, Self::String | Self::NullString)
    }

    /// Whether the generated file must import `database/sql` for this type.
    pub fn requires_sql_import(self) -> bool {
        matches!(self, Self::NullString)
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `orm` tag component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrmTag {
    /// `pk`, from key `PRI`
    PrimaryKey,
    /// `unique`, from key `UNI`
    Unique,
    /// `index`, from key `MUL`
    Index,
    /// SQL type-class label for `char`/`varchar` columns
    SqlType(&'static str),
    /// `autoincr`
    AutoIncrement,
    /// `notnull`
    NotNull,
    /// Default value, already quoted when the Go type is string-like
    Default(String),
    /// `created`, on a `CreatedAt` field
    Created,
    /// `updated`, on an `UpdatedAt` field
    Updated,
    /// `deleted`, on a `DeletedAt` field
    Deleted,
}

impl fmt::Display for OrmTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryKey => f.write_str("pk"),
            Self::Unique => f.write_str("unique"),
            Self::Index => f.write_str("index"),
            Self::SqlType(label) => f.write_str(label),
            Self::AutoIncrement => f.write_str("autoincr"),
            Self::NotNull => f.write_str("notnull"),
            Self::Default(value) => write!(f, "default({})", value),
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
            Self::Deleted => f.write_str("deleted"),
        }
    }
}

/// Ordered list of tag components attached to one field.
///
/// Displays as `` `orm:"pk autoincr notnull"` ``, or as the empty string
/// when there are no components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<OrmTag>);

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component after the existing ones.
    pub fn push(&mut self, tag: OrmTag) {
        self.0.push(tag);
    }

    /// Whether the set renders as the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tag components in the order they were appended.
    pub fn components(&self) -> &[OrmTag] {
        &self.0
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str("`orm:\"")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        f.write_str("\"`")
    }
}

/// Mapped form of one column: Go field name, Go type and struct tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Identifier-cased column name
    pub name: String,
    /// Go type after nullable widening
    pub go_type: GoType,
    /// Tag components in emission order
    pub tags: TagSet,
}

impl FieldSpec {
    /// The struct tag as it appears in generated source.
    pub fn tag(&self) -> String {
        self.tags.to_string()
    }
}

/// A table and its mapped fields in column declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Table name as reported by the server, also the output file stem
    pub name: String,
    /// Mapped columns
    pub fields: Vec<FieldSpec>,
}

impl TableSpec {
    /// Creates a table from already mapped fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Identifier-cased struct name for this table.
    pub fn type_name(&self) -> String {
        crate::mapping::to_camel_case(&self.name)
    }

    /// Whether any field needs the `database/sql` import.
    pub fn needs_sql_import(&self) -> bool {
        self.fields.iter().any(|f| f.go_type.requires_sql_import())
    }
}
