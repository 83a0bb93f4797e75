//! CMake source-listing generation.
//!
//! Renders the parsed SMP source manifest into two committed CMake files:
//! the full x86_64 listing (C, assembly, headers) and the generic-C ARM
//! listing (intrinsic-free C sources, headers shared with x86_64).

mod generator;
mod render;

pub use generator::{ARM_SOURCES_FILE, Generator, SOURCES_FILE};
