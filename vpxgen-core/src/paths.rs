//! Path normalization shared by the props parser and the generators.

/// Directory fragments that mark a source file as architecture-specific.
///
/// MIPS and PPC should never appear in the SMP listing, but the filter keeps
/// them out regardless.
pub const ARCH_DIRS: [&str; 4] = ["/x86/", "/arm/", "/mips/", "/ppc/"];

/// Normalize an MSBuild `Include` path into the CMake-facing form.
///
/// Backslashes become forward slashes and parent-relative segments are
/// rebased onto the vendored `libvpx/` checkout (the props file lives one
/// level inside it).
pub fn normalize_include(raw: &str) -> String {
    raw.replace('\\', "/").replace("../", "libvpx/")
}

/// Check whether a normalized path lives under an architecture-specific
/// directory (x86 intrinsics, NEON, etc.).
pub fn is_arch_specific(path: &str) -> bool {
    ARCH_DIRS.iter().any(|dir| path.contains(dir))
}
