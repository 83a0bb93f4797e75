//! Core utilities for the vpxgen generators.
//!
//! This crate provides the types and helpers shared by the CMake listing
//! generator and the RTCD header flattener.

mod codegen;
mod file;
mod paths;

// Generation types
pub use codegen::{Codegen, GenerateResult, PreviewFile};
// File operations
pub use file::{write_all, write_file};
// Path utilities
pub use paths::{ARCH_DIRS, is_arch_specific, normalize_include};
