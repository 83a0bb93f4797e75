//! Parsing of the vendored libvpx SMP props file.
//!
//! The SMP subdirectory of the libvpx checkout ships an MSBuild props file
//! enumerating every compiled source, assembly source, and header of the
//! library. This crate parses that XML into a [`SourceManifest`], applying
//! the filtering rules that keep SMP scaffolding and per-platform generated
//! files out of the shared listings.

mod error;
mod file;
mod manifest;

pub use error::{Error, Result};
pub use file::PropsFile;
pub use manifest::{MSBUILD_NS, SourceManifest};
