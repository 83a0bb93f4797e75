use vpxgen_props::SourceManifest;

/// Render the full x86_64 listing: C sources, assembly, headers.
pub(crate) fn render_x64(manifest: &SourceManifest, source: &str) -> String {
    let mut out = String::new();
    banner(&mut out, source, false);
    out.push('\n');
    render_list(&mut out, "VPX_C_SOURCES", &manifest.c_sources);
    out.push('\n');
    render_list(&mut out, "VPX_X86_ASM_SOURCES", &manifest.asm_sources);
    out.push('\n');
    render_list(&mut out, "VPX_HEADERS", &manifest.headers);
    out
}

/// Render the generic-C ARM listing.
///
/// Headers are shared with the x86_64 build, so the ARM header variable
/// aliases `VPX_HEADERS` instead of repeating the list.
pub(crate) fn render_arm(manifest: &SourceManifest, source: &str) -> String {
    let mut out = String::new();
    banner(&mut out, source, true);
    out.push('\n');
    render_list(&mut out, "VPX_C_SOURCES_ARM", &manifest.generic_c_sources());
    out.push('\n');
    out.push_str("set(VPX_HEADERS_ARM\n    ${VPX_HEADERS}\n)\n");
    out
}

fn banner(out: &mut String, source: &str, generic_c: bool) {
    if generic_c {
        out.push_str(&format!(
            "# Auto-generated from {source} (Filtered for Generic C)\n"
        ));
    } else {
        out.push_str(&format!("# Auto-generated from {source}\n"));
    }
    out.push_str("# Do not edit manually - re-run `vpxgen sources`\n");
}

fn render_list(out: &mut String, name: &str, paths: &[String]) {
    out.push_str(&format!("set({name}\n"));
    for path in paths {
        out.push_str(&format!("    ${{CMAKE_CURRENT_SOURCE_DIR}}/{path}\n"));
    }
    out.push_str(")\n");
}
