//! Unit tests for the column mapper.
//!
//! These tests pin the tag ordering and type widening rules, since both are
//! visible byte-for-byte in generated files.

use super::{map_column, map_table};
use crate::models::{ColumnMetadata, GoType, OrmTag};
use proptest::prelude::*;

// =============================================================================
// Tag Ordering Tests
// =============================================================================

#[test]
fn test_auto_increment_primary_key() {
    let column = ColumnMetadata::new("id", "int(11)")
        .not_null()
        .with_key("PRI")
        .with_extra("auto_increment");

    let field = map_column(&column);

    assert_eq!(field.name, "Id");
    assert_eq!(field.go_type, GoType::Int);
    assert_eq!(
        field.tags.components(),
        &[OrmTag::PrimaryKey, OrmTag::AutoIncrement, OrmTag::NotNull]
    );
    assert_eq!(field.tag(), "`orm:\"pk autoincr notnull\"`");
}

#[test]
fn test_nullable_varchar_is_widened() {
    let field = map_column(&ColumnMetadata::new("email", "varchar(255)"));

    assert_eq!(field.name, "Email");
    assert_eq!(field.go_type, GoType::NullString);
    assert_eq!(field.tag(), "`orm:\"varchar\"`");
}

#[test]
fn test_nullable_datetime_created_at() {
    let field = map_column(&ColumnMetadata::new("created_at", "datetime"));

    assert_eq!(field.name, "CreatedAt");
    assert_eq!(field.go_type, GoType::Time);
    assert_eq!(field.tag(), "`orm:\"created\"`");
}

#[test]
fn test_timestamp_markers() {
    let updated = map_column(&ColumnMetadata::new("updated_at", "timestamp").not_null());
    assert_eq!(updated.tag(), "`orm:\"notnull updated\"`");

    let deleted = map_column(&ColumnMetadata::new("DELETED_AT", "datetime"));
    assert_eq!(deleted.name, "DeletedAt");
    assert_eq!(deleted.tag(), "`orm:\"deleted\"`");
}

#[test]
fn test_unique_char_with_default_and_not_null() {
    let column = ColumnMetadata::new("country_code", "CHAR(2)")
        .not_null()
        .with_key("UNI")
        .with_default("US");

    let field = map_column(&column);

    assert_eq!(field.go_type, GoType::String);
    assert_eq!(field.tag(), "`orm:\"unique char notnull default('US')\"`");
}

#[test]
fn test_index_key() {
    let field = map_column(&ColumnMetadata::new("user_id", "bigint(20)").with_key("MUL"));

    assert_eq!(field.name, "UserId");
    assert_eq!(field.go_type, GoType::Int64);
    assert_eq!(field.tag(), "`orm:\"index\"`");
}

#[test]
fn test_every_tag_kind_in_order() {
    let column = ColumnMetadata::new("created_at", "varchar(32)")
        .not_null()
        .with_key("PRI")
        .with_default("now")
        .with_extra("auto_increment");

    let field = map_column(&column);

    assert_eq!(
        field.tag(),
        "`orm:\"pk varchar autoincr notnull default('now') created\"`"
    );
}

// =============================================================================
// Default Value Tests
// =============================================================================

#[test]
fn test_numeric_default_is_not_quoted() {
    let field = map_column(&ColumnMetadata::new("age", "int(11)").not_null().with_default("0"));
    assert_eq!(field.tag(), "`orm:\"notnull default(0)\"`");
}

#[test]
fn test_nullable_string_default_is_quoted_after_widening() {
    let field = map_column(&ColumnMetadata::new("status", "enum('a','b')").with_default("a"));

    assert_eq!(field.go_type, GoType::NullString);
    assert_eq!(field.tag(), "`orm:\"default('a')\"`");
}

#[test]
fn test_time_default_is_not_quoted() {
    let field = map_column(
        &ColumnMetadata::new("seen", "timestamp").with_default("CURRENT_TIMESTAMP"),
    );
    assert_eq!(field.tag(), "`orm:\"default(CURRENT_TIMESTAMP)\"`");
}

// =============================================================================
// Type Resolution Through The Mapper
// =============================================================================

#[test]
fn test_nullable_non_string_types_are_not_widened() {
    let cases = [
        ("int(11)", GoType::Int),
        ("smallint(6)", GoType::Int),
        ("bigint(20)", GoType::Int64),
        ("float", GoType::Float32),
        ("double", GoType::Float64),
        ("blob", GoType::Bytes),
        ("bool", GoType::Bool),
        ("date", GoType::Time),
    ];

    for (sql_type, expected) in cases {
        let field = map_column(&ColumnMetadata::new("value", sql_type));
        assert_eq!(field.go_type, expected, "type {}", sql_type);
        assert!(field.tags.is_empty(), "type {}", sql_type);
        assert_eq!(field.tag(), "");
    }
}

#[test]
fn test_text_is_widened_without_type_tag() {
    let field = map_column(&ColumnMetadata::new("body", "text"));
    assert_eq!(field.go_type, GoType::NullString);
    assert_eq!(field.tag(), "");
}

#[test]
fn test_unknown_type_falls_back_to_varchar() {
    let field = map_column(&ColumnMetadata::new("flag", "tinyint(1)").not_null());
    assert_eq!(field.go_type, GoType::String);
    assert_eq!(field.tag(), "`orm:\"varchar notnull\"`");
}

#[test]
fn test_null_column_value_other_than_no_is_nullable() {
    let mut column = ColumnMetadata::new("note", "varchar(10)");
    column.null = String::new();

    assert_eq!(map_column(&column).go_type, GoType::NullString);
}

#[test]
fn test_map_table_keeps_order_and_count() {
    let columns = vec![
        ColumnMetadata::new("id", "int(11)").not_null().with_key("PRI"),
        ColumnMetadata::new("name", "varchar(64)"),
        ColumnMetadata::new("id", "int(11)"),
    ];

    let table = map_table("user_account", &columns);

    assert_eq!(table.type_name(), "UserAccount");
    let names: Vec<_> = table.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Id", "Name", "Id"]);
}

#[test]
fn test_map_empty_table() {
    let table = map_table("empty", &[]);
    assert!(table.fields.is_empty());
    assert!(!table.needs_sql_import());
}

// =============================================================================
// Property Tests
// =============================================================================

fn arb_column() -> impl Strategy<Value = ColumnMetadata> {
    (
        "[a-zA-Z_]{0,16}",
        prop_oneof![
            Just("int(11)".to_string()),
            Just("varchar(255)".to_string()),
            Just("datetime".to_string()),
            Just("char(4)".to_string()),
            "[a-z]{0,10}(\\([0-9]{1,3}\\))?",
        ],
        prop_oneof![Just("YES"), Just("NO"), Just("")],
        prop_oneof![Just(""), Just("PRI"), Just("UNI"), Just("MUL"), Just("FOO")],
        "[a-zA-Z0-9 ]{0,8}",
        prop_oneof![Just(""), Just("auto_increment"), Just("on update CURRENT_TIMESTAMP")],
    )
        .prop_map(|(field, sql_type, null, key, default, extra)| ColumnMetadata {
            field,
            sql_type,
            null: null.to_string(),
            key: key.to_string(),
            default,
            extra: extra.to_string(),
        })
}

proptest! {
    #[test]
    fn prop_mapping_is_deterministic(column in arb_column()) {
        prop_assert_eq!(map_column(&column), map_column(&column.clone()));
    }

    #[test]
    fn prop_not_null_tag_matches_null_column(column in arb_column()) {
        let field = map_column(&column);
        let has_not_null = field.tags.components().contains(&OrmTag::NotNull);
        prop_assert_eq!(has_not_null, column.null == "NO");
    }

    #[test]
    fn prop_plain_string_only_when_not_null(column in arb_column()) {
        let field = map_column(&column);
        if field.go_type == GoType::String {
            prop_assert!(column.is_not_null());
        }
        if field.go_type == GoType::NullString {
            prop_assert!(!column.is_not_null());
        }
    }

    #[test]
    fn prop_tag_is_empty_or_wrapped(column in arb_column()) {
        let tag = map_column(&column).tag();
        prop_assert!(tag.is_empty() || (tag.starts_with("`orm:\"") && tag.ends_with("\"`")));
    }

    #[test]
    fn prop_field_name_has_no_underscores_or_spaces(column in arb_column()) {
        let name = map_column(&column).name;
        prop_assert!(!name.contains('_'));
        prop_assert!(!name.contains(' '));
    }
}
