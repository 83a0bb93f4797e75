use std::path::Path;

use eyre::Result;
use vpxgen_core::{Codegen, GenerateResult, PreviewFile, write_all};
use vpxgen_props::SourceManifest;

use crate::render::{render_arm, render_x64};

/// File name of the full x86_64 listing.
pub const SOURCES_FILE: &str = "VpxSources.cmake";

/// File name of the generic-C ARM listing.
pub const ARM_SOURCES_FILE: &str = "VpxSourcesArm.cmake";

/// CMake listing generator over a parsed source manifest.
pub struct Generator<'a> {
    manifest: &'a SourceManifest,
    source: String,
}

impl<'a> Generator<'a> {
    /// Create a generator. `source` names the props file the listings were
    /// extracted from and appears in the generated banners.
    pub fn new(manifest: &'a SourceManifest, source: impl Into<String>) -> Self {
        Self {
            manifest,
            source: source.into(),
        }
    }
}

impl Codegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        vec![
            PreviewFile::new(SOURCES_FILE, render_x64(self.manifest, &self.source)),
            PreviewFile::new(ARM_SOURCES_FILE, render_arm(self.manifest, &self.source)),
        ]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let written = write_all(output_dir, &self.preview())?;
        Ok(GenerateResult {
            written,
            skipped: Vec::new(),
        })
    }
}
