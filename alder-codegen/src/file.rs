//! Generated-file value and filesystem writer.

use std::path::{Path, PathBuf};

use eyre::Result;

/// A generated source file: a relative path plus its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl SourceFile {
    /// Create a new source file.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Write a source file under the given base directory, creating parent
/// directories as needed. Existing files are overwritten. Returns the full
/// path of the written file.
pub fn write_source(file: &SourceFile, base: &Path) -> Result<PathBuf> {
    let path = base.join(&file.path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &file.content)?;
    Ok(path)
}
