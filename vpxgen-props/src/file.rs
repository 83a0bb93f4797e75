use std::path::{Path, PathBuf};

use crate::{Result, SourceManifest};

/// An opened props file: raw XML plus the parsed source listing.
#[derive(Debug)]
pub struct PropsFile {
    path: PathBuf,
    content: String,
    manifest: SourceManifest,
}

impl PropsFile {
    /// Open and parse a props file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = SourceManifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw XML content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed source listing.
    pub fn manifest(&self) -> &SourceManifest {
        &self.manifest
    }
}
