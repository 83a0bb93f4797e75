use std::str::FromStr;

use roxmltree::Document;
use vpxgen_core::{is_arch_specific, normalize_include};

use crate::{Error, Result};

/// XML namespace used by MSBuild project and props files.
pub const MSBUILD_NS: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Normalized prefix of files that belong to the SMP build scaffolding
/// rather than the library itself (config is handled separately).
const SMP_PREFIX: &str = "libvpx/SMP/";

/// Compiled sources that are generated or per-platform and never belong in
/// the shared listing.
const C_SKIP_FRAGMENTS: [&str; 2] = ["vpx_config.c", "dce_defs.c"];

/// Headers that are generated per-platform; the flattened RTCD headers are
/// produced by `vpxgen rtcd` instead.
const HEADER_SKIP_FRAGMENTS: [&str; 3] = ["vpx_config.h", "vpx_version.h", "_rtcd.h"];

/// Source listing extracted from the SMP props file.
///
/// All paths are normalized (forward slashes, rebased onto `libvpx/`) and
/// each list is sorted for stable, diff-friendly generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceManifest {
    /// Compiled C sources (`ClCompile` items)
    pub c_sources: Vec<String>,
    /// Hand-written x86_64 assembly (`YASM` items)
    pub asm_sources: Vec<String>,
    /// Public and internal headers (`ClInclude` items)
    pub headers: Vec<String>,
}

impl SourceManifest {
    /// Parse a props file with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let doc =
            Document::parse(content).map_err(|e| Error::parse(e, content, filename))?;

        let root = doc.root_element();
        if !root.has_tag_name((MSBUILD_NS, "Project")) {
            return Err(Error::invalid_project_at(
                "root element is not an MSBuild <Project>",
                content,
                filename,
                root.range(),
            ));
        }

        let mut c_sources = Vec::new();
        let mut asm_sources = Vec::new();
        let mut headers = Vec::new();

        for item in doc
            .descendants()
            .filter(|n| n.has_tag_name((MSBUILD_NS, "ClCompile")))
        {
            let Some(raw) = item.attribute("Include") else {
                continue;
            };
            let path = normalize_include(raw);
            if path.starts_with(SMP_PREFIX)
                || C_SKIP_FRAGMENTS.iter().any(|f| path.contains(f))
            {
                continue;
            }
            c_sources.push(path);
        }

        for item in doc
            .descendants()
            .filter(|n| n.has_tag_name((MSBUILD_NS, "YASM")))
        {
            let Some(raw) = item.attribute("Include") else {
                continue;
            };
            let path = normalize_include(raw);
            if let Some(excluded) = item
                .children()
                .find(|c| c.has_tag_name((MSBUILD_NS, "ExcludedFromBuild")))
            {
                // A Win32-only exclusion means the file still builds on x64,
                // which is the only Windows/Linux flavor supported. Anything
                // else is skipped.
                let condition = excluded.attribute("Condition").unwrap_or("");
                if !condition.contains("Win32") {
                    continue;
                }
            }
            asm_sources.push(path);
        }

        for item in doc
            .descendants()
            .filter(|n| n.has_tag_name((MSBUILD_NS, "ClInclude")))
        {
            let Some(raw) = item.attribute("Include") else {
                continue;
            };
            let path = normalize_include(raw);
            if path.starts_with(SMP_PREFIX)
                || HEADER_SKIP_FRAGMENTS.iter().any(|f| path.contains(f))
            {
                continue;
            }
            headers.push(path);
        }

        c_sources.sort();
        asm_sources.sort();
        headers.sort();

        Ok(Self {
            c_sources,
            asm_sources,
            headers,
        })
    }

    /// C sources usable in a generic-C build: everything that is not an
    /// architecture-specific intrinsic file.
    pub fn generic_c_sources(&self) -> Vec<String> {
        self.c_sources
            .iter()
            .filter(|src| !is_arch_specific(src))
            .cloned()
            .collect()
    }
}

impl FromStr for SourceManifest {
    type Err = Box<Error>;

    fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "libvpx_files.props")
    }
}
