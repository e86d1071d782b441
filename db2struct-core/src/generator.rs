//! The generation pipeline: list tables, filter, describe, map, render, write.
//!
//! Tables are processed one at a time in the order the reader lists them.
//! The first failure stops the run; files already written stay on disk.

use crate::{
    Result,
    adapters::SchemaReader,
    emit::OutputTarget,
    error::Db2StructError,
    filter::TableFilter,
    mapping::map_table,
    render::render_file,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory and package the files are written to
    pub target: OutputTarget,
    /// Tables to generate
    pub filter: TableFilter,
}

impl GeneratorConfig {
    /// Generates every table into `target`.
    pub fn new(target: OutputTarget) -> Self {
        Self {
            target,
            filter: TableFilter::all(),
        }
    }

    /// Builder method to restrict the run to an allowlist.
    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in processing order.
    pub generated: Vec<PathBuf>,
    /// Tables excluded by the filter.
    pub skipped: Vec<String>,
}

/// Drives a [`SchemaReader`] through the generation pipeline.
pub struct Generator<'a> {
    reader: &'a dyn SchemaReader,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator reading from `reader`.
    pub fn new(reader: &'a dyn SchemaReader, config: GeneratorConfig) -> Self {
        Self { reader, config }
    }

    /// Runs the pipeline, printing a notice per table to `console`.
    ///
    /// Skipped tables print `[Skip] <table>`. Generated tables print
    /// `[Generate] <table>: <path>` followed by the file contents.
    ///
    /// # Errors
    /// Returns the first introspection, render or write error. Tables after
    /// the failing one are not processed.
    pub async fn run<W: Write>(&self, console: &mut W) -> Result<GenerationReport> {
        let target = &self.config.target;
        info!("Reading tables from {}", self.reader.source_description());
        info!("Output: {} (package {})", target.dir().display(), target.package());

        let tables = self.reader.list_tables().await?;
        debug!("Found {} tables", tables.len());

        let mut report = GenerationReport::default();
        for table in tables {
            if !self.config.filter.selects(&table) {
                writeln!(console, "[Skip] {}", table).map_err(console_error)?;
                report.skipped.push(table);
                continue;
            }

            let path = self.generate_table(&table, console).await?;
            report.generated.push(path);
        }

        info!(
            "✓ Generated {} files, skipped {} tables",
            report.generated.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    async fn generate_table<W: Write>(&self, table: &str, console: &mut W) -> Result<PathBuf> {
        let target = &self.config.target;

        let columns = self.reader.describe_table(table).await?;
        let spec = map_table(table, &columns);
        let code = render_file(target.package(), &spec)?;
        let path = target.file_path(table);

        writeln!(console, "[Generate] {}: {}\n{}", table, path.display(), code)
            .map_err(console_error)?;
        target.write(&path, &code).await?;

        debug!("Generated {} with {} fields", spec.type_name(), spec.fields.len());
        Ok(path)
    }
}

fn console_error(e: std::io::Error) -> Db2StructError {
    Db2StructError::Io {
        context: "Failed to write to the console".to_string(),
        source: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticSchema;
    use crate::models::ColumnMetadata;

    fn schema() -> StaticSchema {
        StaticSchema::new()
            .with_table(
                "user",
                vec![
                    ColumnMetadata::new("id", "int(11)")
                        .not_null()
                        .with_key("PRI")
                        .with_extra("auto_increment"),
                ],
            )
            .with_table(
                "address",
                vec![ColumnMetadata::new("city", "varchar(64)").not_null()],
            )
    }

    fn config(dir: &std::path::Path) -> GeneratorConfig {
        GeneratorConfig::new(OutputTarget::resolve_from(dir, ".").expect("valid dir"))
    }

    #[tokio::test]
    async fn test_run_generates_every_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = schema();
        let generator = Generator::new(&schema, config(dir.path()));

        let mut console = Vec::new();
        let report = generator.run(&mut console).await.expect("run");

        assert_eq!(report.generated.len(), 2);
        assert!(report.skipped.is_empty());
        assert!(dir.path().join("user.go").is_file());
        assert!(dir.path().join("address.go").is_file());
    }

    #[tokio::test]
    async fn test_run_reports_skipped_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = schema();
        let config = config(dir.path()).with_filter(TableFilter::from_arg("address"));
        let generator = Generator::new(&schema, config);

        let mut console = Vec::new();
        let report = generator.run(&mut console).await.expect("run");
        let output = String::from_utf8(console).expect("utf8");

        assert_eq!(report.skipped, ["user"]);
        assert!(output.starts_with("[Skip] user\n[Generate] address: "));
        assert!(!dir.path().join("user.go").exists());
    }

    #[tokio::test]
    async fn test_console_echoes_generated_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = schema();
        let config = config(dir.path()).with_filter(TableFilter::from_arg("user"));
        let generator = Generator::new(&schema, config);

        let mut console = Vec::new();
        let report = generator.run(&mut console).await.expect("run");

        let path = &report.generated[0];
        let code = std::fs::read_to_string(path).expect("read");
        let output = String::from_utf8(console).expect("utf8");
        assert!(output.ends_with(&format!("[Generate] user: {}\n{}\n", path.display(), code)));
    }
}
