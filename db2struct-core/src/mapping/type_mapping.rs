//! MySQL type string to Go type resolution.
//!
//! Resolution is a prefix match against [`TYPE_RULES`], first match wins.
//! The rule order is part of the generated output's contract and must not be
//! reordered: `date` is listed before `datetime`, so `datetime` columns resolve
//! through the `date` rule (same Go type, different label).

use crate::models::GoType;

/// One (SQL type prefix -> Go type) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMappingRule {
    /// Lowercase prefix matched against the start of the raw type
    pub prefix: &'static str,
    /// Go type for columns matching this rule
    pub go_type: GoType,
}

const fn rule(prefix: &'static str, go_type: GoType) -> TypeMappingRule {
    TypeMappingRule { prefix, go_type }
}

/// Prefix rules in priority order.
pub const TYPE_RULES: &[TypeMappingRule] = &[
    rule("int", GoType::Int),
    rule("smallint", GoType::Int),
    rule("bigint", GoType::Int64),
    rule("float", GoType::Float32),
    rule("double", GoType::Float64),
    rule("char", GoType::String),
    rule("blob", GoType::Bytes),
    rule("varchar", GoType::String),
    rule("text", GoType::String),
    rule("bool", GoType::Bool),
    rule("timestamp", GoType::Time),
    rule("date", GoType::Time),
    rule("datetime", GoType::Time),
    rule("enum", GoType::String),
];

/// Type-class label used when no rule matches.
pub const FALLBACK_TYPE_CLASS: &str = "varchar";

/// Result of resolving a raw SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType {
    /// Prefix of the matching rule, or [`FALLBACK_TYPE_CLASS`]
    pub type_class: &'static str,
    /// Go type before nullable widening
    pub go_type: GoType,
}

impl ResolvedType {
    /// `char` and `varchar` columns carry their type class as a tag.
    pub fn is_character_class(&self) -> bool {
        matches!(self.type_class, "char" | "varchar")
    }
}

/// Resolves a raw MySQL type (e.g. `"VARCHAR(255)"`) to its type class and Go type.
///
/// # Example
/// ```rust
/// use db2struct_core::mapping::resolve_type;
/// use db2struct_core::models::GoType;
///
/// let resolved = resolve_type("BIGINT(20) UNSIGNED");
/// assert_eq!(resolved.type_class, "bigint");
/// assert_eq!(resolved.go_type, GoType::Int64);
/// ```
pub fn resolve_type(raw_type: &str) -> ResolvedType {
    let normalized = raw_type.to_lowercase();

    TYPE_RULES
        .iter()
        .find(|rule| normalized.starts_with(rule.prefix))
        .map_or(
            ResolvedType {
                type_class: FALLBACK_TYPE_CLASS,
                go_type: GoType::String,
            },
            |rule| ResolvedType {
                type_class: rule.prefix,
                go_type: rule.go_type,
            },
        )
}
