//! Framework-agnostic code generation trait.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::file::{SourceFile, write_source};

/// Trait for framework-specific module generators.
///
/// Implement this trait to unparse a view-tree module into source text for
/// a new target framework.
pub trait ModuleCodegen {
    /// Target framework identifier (e.g., "swiftui")
    fn framework(&self) -> &'static str;

    /// File extension for generated source files (e.g., "swift")
    fn file_extension(&self) -> &'static str;

    /// Preview the generated file without writing to disk
    fn preview(&self) -> SourceFile;

    /// Generate the file into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        write_source(&self.preview(), output_dir)
    }
}
