use std::path::Path;

use eyre::Result;

use crate::codegen::PreviewFile;

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Write every rendered file under `base`, returning the relative paths written.
///
/// Generated output always overwrites; these files are committed artifacts
/// that must track their input exactly.
pub fn write_all(base: &Path, files: &[PreviewFile]) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        write_file(&base.join(&file.path), &file.content)?;
        written.push(file.path.clone());
    }
    Ok(written)
}
