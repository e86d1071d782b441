//! Table selection.

/// Allowlist of table names. An empty allowlist selects every table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    allow: Vec<String>,
}

impl TableFilter {
    /// Selects every table.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selects only the named tables (exact, case-sensitive match).
    pub fn from_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a filter from a comma-separated argument such as `"user,address"`.
    pub fn from_arg(arg: &str) -> Self {
        Self::from_list(arg.split(','))
    }

    /// Whether no allowlist was given.
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty()
    }

    /// Whether `table` should be generated.
    pub fn selects(&self, table: &str) -> bool {
        self.allow.is_empty() || self.allow.iter().any(|t| t == table)
    }
}
