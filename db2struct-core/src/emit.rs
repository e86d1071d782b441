//! Output directory handling and file writing.

use crate::{Result, error::Db2StructError};
use std::path::{Component, Path, PathBuf};

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "go";

/// Package name used when the output directory has no final component
/// (the filesystem root).
pub const FALLBACK_PACKAGE: &str = "main";

/// A validated output directory and the Go package name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    package: String,
}

impl OutputTarget {
    /// Resolves and validates the output directory argument.
    ///
    /// Relative paths are resolved against the current working directory and
    /// cleaned lexically. The directory must already exist.
    ///
    /// # Errors
    /// Returns [`Db2StructError::InvalidOutputDir`] if the path does not
    /// exist or is not a directory.
    pub fn resolve(arg: &str) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Db2StructError::Io {
            context: "Failed to read the current directory".to_string(),
            source: e,
        })?;
        Self::resolve_from(&cwd, arg)
    }

    /// Same as [`OutputTarget::resolve`] with an explicit base directory.
    ///
    /// # Errors
    /// Returns [`Db2StructError::InvalidOutputDir`] if the path does not
    /// exist or is not a directory.
    pub fn resolve_from(base: &Path, arg: &str) -> Result<Self> {
        let dir = clean_path(&base.join(arg));

        let metadata = std::fs::metadata(&dir)
            .map_err(|e| Db2StructError::invalid_output_dir(arg, e.to_string()))?;
        if !metadata.is_dir() {
            return Err(Db2StructError::invalid_output_dir(arg, "not a directory"));
        }

        let package = dir
            .file_name()
            .map_or_else(|| FALLBACK_PACKAGE.to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self { dir, package })
    }

    /// Absolute, cleaned output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Go package name for generated files.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Path of the file generated for `table`.
    pub fn file_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", table, OUTPUT_EXTENSION))
    }

    /// Writes a generated file, replacing any existing file at that path.
    ///
    /// # Errors
    /// Returns an I/O error naming the path if the write fails.
    pub async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| Db2StructError::write_failed(path, e))?;
        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Lexically normalizes a path: drops `.` and resolves `..` against the
/// preceding component. `..` above the root stays at the root.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if cleaned.file_name().is_some() {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
