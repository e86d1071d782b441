//! Column mapping: raw `DESCRIBE` rows to Go struct fields.
//!
//! # Module Structure
//! - `type_mapping`: ordered prefix rules from SQL types to Go types
//! - `naming`: identifier casing for table and column names
//!
//! [`map_column`] is pure: the same [`ColumnMetadata`] always yields the same
//! [`FieldSpec`], and no input makes it fail. Unknown SQL types fall back to
//! `string`.

pub mod naming;
pub mod type_mapping;

#[cfg(test)]
mod tests;

use crate::models::{ColumnMetadata, FieldSpec, GoType, KeyKind, OrmTag, TableSpec, TagSet};

pub use naming::to_camel_case;
pub use type_mapping::{ResolvedType, TYPE_RULES, TypeMappingRule, resolve_type};

/// Maps one column to its Go field declaration.
///
/// Tag components are appended in a fixed order: key, character type class,
/// `autoincr`, `notnull`, `default(..)`, then the timestamp markers derived
/// from the field name. Nullable string columns are widened to
/// `sql.NullString` instead of receiving a tag.
///
/// # Example
/// ```rust
/// use db2struct_core::mapping::map_column;
/// use db2struct_core::models::{ColumnMetadata, GoType};
///
/// let column = ColumnMetadata::new("id", "int(11)")
///     .not_null()
///     .with_key("PRI")
///     .with_extra("auto_increment");
/// let field = map_column(&column);
///
/// assert_eq!(field.name, "Id");
/// assert_eq!(field.go_type, GoType::Int);
/// assert_eq!(field.tag(), "`orm:\"pk autoincr notnull\"`");
/// ```
pub fn map_column(column: &ColumnMetadata) -> FieldSpec {
    let name = to_camel_case(&column.field);
    let resolved = resolve_type(&column.sql_type);
    let mut go_type = resolved.go_type;
    let mut tags = TagSet::new();

    match column.key_kind() {
        KeyKind::Primary => tags.push(OrmTag::PrimaryKey),
        KeyKind::Unique => tags.push(OrmTag::Unique),
        KeyKind::Multiple => tags.push(OrmTag::Index),
        KeyKind::None => {}
    }

    if resolved.is_character_class() {
        tags.push(OrmTag::SqlType(resolved.type_class));
    }

    if column.is_auto_increment() {
        tags.push(OrmTag::AutoIncrement);
    }

    if column.is_not_null() {
        tags.push(OrmTag::NotNull);
    } else if go_type == GoType::String {
        go_type = GoType::NullString;
    }

    if !column.default.is_empty() {
        let value = if go_type.is_string_like() {
            format!("'{}'", column.default)
        } else {
            column.default.clone()
        };
        tags.push(OrmTag::Default(value));
    }

    match name.as_str() {
        "CreatedAt" => tags.push(OrmTag::Created),
        "UpdatedAt" => tags.push(OrmTag::Updated),
        "DeletedAt" => tags.push(OrmTag::Deleted),
        _ => {}
    }

    FieldSpec {
        name,
        go_type,
        tags,
    }
}

/// Maps every column of a table, preserving declaration order.
pub fn map_table(name: &str, columns: &[ColumnMetadata]) -> TableSpec {
    let fields = columns.iter().map(map_column).collect::<Vec<_>>();
    tracing::trace!("Mapped {} columns for table '{}'", fields.len(), name);
    TableSpec::new(name, fields)
}
