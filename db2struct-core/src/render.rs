//! Go source rendering.
//!
//! [`render_struct`] builds the `type X struct { ... }` block; field rows are
//! laid out by [`StructBody`], which pads each of the three columns to the
//! widest entry in the table. The file around it (package clause, optional
//! import) comes from an askama template.

use crate::{Result, error::Db2StructError, models::TableSpec};
use askama::Template;

/// Indentation of field rows inside the struct block.
const FIELD_INDENT: &str = "    ";

#[derive(Template)]
#[template(
    ext = "txt",
    source = "package {{ package }}\n\n{% if needs_sql_import %}import \"database/sql\"\n\n{% endif %}{{ struct_block }}"
)]
struct GoFileTemplate<'a> {
    package: &'a str,
    needs_sql_import: bool,
    struct_block: &'a str,
}

/// Column-aligned field rows of one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructBody {
    rows: Vec<String>,
}

impl StructBody {
    /// Lays out the fields of `table`, padding name, type and tag columns.
    ///
    /// Column widths are the widest cell in bytes, while padding counts
    /// characters, so a cell with multibyte text gets fewer padding spaces
    /// than its byte length would suggest. Every column is padded, including
    /// the last one.
    pub fn layout(table: &TableSpec) -> Self {
        let cells: Vec<[String; 3]> = table
            .fields
            .iter()
            .map(|f| [f.name.clone(), f.go_type.as_str().to_string(), f.tag()])
            .collect();

        let mut widths = [0usize; 3];
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let rows = cells
            .iter()
            .map(|row| {
                let mut line = String::new();
                for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push_str(cell);
                    line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
                }
                line
            })
            .collect();

        Self { rows }
    }

    /// Rows without indentation or line breaks.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Renders the `type X struct { ... }` block for a table.
///
/// # Example
/// ```rust
/// use db2struct_core::mapping::map_table;
/// use db2struct_core::models::ColumnMetadata;
/// use db2struct_core::render::render_struct;
///
/// let table = map_table("user", &[ColumnMetadata::new("id", "int(11)").not_null()]);
/// assert_eq!(
///     render_struct(&table),
///     "type User struct {\n    Id int `orm:\"notnull\"`\n}\n"
/// );
/// ```
pub fn render_struct(table: &TableSpec) -> String {
    let body = StructBody::layout(table);
    let mut code = format!("type {} struct {{\n", table.type_name());
    for row in body.rows() {
        code.push_str(FIELD_INDENT);
        code.push_str(row);
        code.push('\n');
    }
    code.push_str("}\n");
    code
}

/// Renders a complete Go source file for one table.
///
/// # Errors
/// Returns a render error if the template fails to render.
pub fn render_file(package: &str, table: &TableSpec) -> Result<String> {
    let struct_block = render_struct(table);

    let template = GoFileTemplate {
        package,
        needs_sql_import: table.needs_sql_import(),
        struct_block: &struct_block,
    };

    template.render().map_err(|e| Db2StructError::Render {
        table: table.name.clone(),
        source: e,
    })
}
