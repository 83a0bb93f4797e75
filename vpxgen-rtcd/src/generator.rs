use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use vpxgen_core::{Codegen, GenerateResult, PreviewFile, write_all};

use crate::flatten::flatten_header;

/// The RTCD headers produced by the x86_64 configuration.
pub const RTCD_HEADERS: [&str; 4] = [
    "vp8_rtcd.h",
    "vp9_rtcd.h",
    "vpx_dsp_rtcd.h",
    "vpx_scale_rtcd.h",
];

const BANNER: &str = "/*\n * Auto-generated Generic C RTCD header for ARM64\n * Generated from the x86_64 RTCD headers by `vpxgen rtcd`\n */\n";

/// An RTCD header read from the x86_64 configuration directory.
#[derive(Debug)]
pub struct InputHeader {
    pub name: String,
    pub content: String,
}

/// Read the known RTCD headers from `input_dir`.
///
/// Returns the headers found plus the names of any that were absent. A
/// missing header is the caller's to report; a missing directory is fatal.
pub fn load_headers(input_dir: &Path) -> Result<(Vec<InputHeader>, Vec<String>)> {
    if !input_dir.is_dir() {
        bail!(
            "RTCD input directory '{}' not found; is the libvpx submodule initialized?",
            input_dir.display()
        );
    }

    let mut headers = Vec::new();
    let mut missing = Vec::new();
    for name in RTCD_HEADERS {
        let path = input_dir.join(name);
        if !path.exists() {
            missing.push(name.to_string());
            continue;
        }
        let content = std::fs::read_to_string(&path)?;
        headers.push(InputHeader {
            name: name.to_string(),
            content,
        });
    }
    Ok((headers, missing))
}

/// Render one flattened header, banner included.
pub fn render_header(content: &str) -> String {
    format!("{BANNER}{}\n", flatten_header(content))
}

/// Generic-C RTCD header generator over a set of loaded x86_64 headers.
pub struct Generator {
    headers: Vec<InputHeader>,
    missing: Vec<String>,
}

impl Generator {
    pub fn new(headers: Vec<InputHeader>, missing: Vec<String>) -> Self {
        Self { headers, missing }
    }

    /// Convenience constructor reading the headers from `input_dir`.
    pub fn from_dir(input_dir: &Path) -> Result<Self> {
        let (headers, missing) = load_headers(input_dir)?;
        Ok(Self::new(headers, missing))
    }

    /// Names of the expected headers that were not found.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

impl Codegen for Generator {
    fn preview(&self) -> Vec<PreviewFile> {
        self.headers
            .iter()
            .map(|h| PreviewFile::new(&h.name, render_header(&h.content)))
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let written = write_all(output_dir, &self.preview())?;
        Ok(GenerateResult {
            written,
            skipped: self.missing.clone(),
        })
    }
}
