//! RTCD header flattening.
//!
//! The x86_64 configuration of libvpx generates "runtime CPU detection"
//! headers that declare one prototype per optimized variant plus a function
//! pointer assigned at startup. A generic-C ARM build has exactly one
//! implementation per function, so the pointers are dead weight: this crate
//! rewrites each header so that every entry point resolves statically to the
//! portable `_c` implementation.

mod flatten;
mod generator;

pub use flatten::{OPT_SUFFIXES, flatten_header};
pub use generator::{Generator, InputHeader, RTCD_HEADERS, load_headers, render_header};
