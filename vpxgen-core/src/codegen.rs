//! Generator-facing types shared by the CMake and RTCD backends.

use std::path::Path;

use eyre::Result;

/// Trait for the file generators driven by the CLI.
///
/// Implementors render their output in memory (`preview`) and write it to a
/// target directory (`generate`).
pub trait Codegen {
    /// Render all output files without touching the filesystem
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write all output files into the specified directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Inputs that were expected but absent (reported, not fatal)
    pub skipped: Vec<String>,
}

/// A rendered file that has not been written yet
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
