use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

/// Optimized-variant suffixes generated by the x86_64 RTCD configuration.
pub const OPT_SUFFIXES: [&str; 7] = ["sse2", "ssse3", "sse4_1", "avx", "avx2", "avx512", "mmx"];

/// Extracts the function name from a pointer declaration, e.g.
/// `RTCD_EXTERN void (*vpx_avg_4x4)(...)`.
static POINTER_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\*(\w+)\)").unwrap());

/// Matches `#define <name> <base>_<suffix>` for an optimized suffix, so the
/// macro can be redirected to `<base>_c`.
static DEFINE_REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = OPT_SUFFIXES.join("|");
    Regex::new(&format!(r"^#define\s+(\w+)\s+(\w+)_(?:{suffixes})\b")).unwrap()
});

/// Flatten an x86_64 RTCD header into its generic-C form.
///
/// Line-oriented rewrite:
/// - the body of `setup_rtcd_internal` is emptied (nothing to select at
///   runtime),
/// - prototypes of optimized variants are dropped,
/// - `RTCD_EXTERN` function pointers become `#define name name_c`,
/// - macros forced to an optimized variant are redirected to `_c`,
/// - includes of x86-only headers are dropped.
///
/// The first rewrite of a macro name wins; later occurrences are discarded.
pub fn flatten_header(content: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut defined: IndexSet<String> = IndexSet::new();
    let mut in_setup = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if line.contains("static void setup_rtcd_internal(void)") {
            in_setup = true;
            out.push(line.to_string());
            out.push("{".to_string());
            out.push("}".to_string());
            continue;
        }
        if in_setup {
            if trimmed == "}" {
                in_setup = false;
            }
            continue;
        }

        // Optimized-variant prototypes have no implementation in a generic-C
        // build.
        if OPT_SUFFIXES
            .iter()
            .any(|suffix| line.contains(&format!("_{suffix}(")))
        {
            continue;
        }

        // Runtime-selected function pointers resolve statically to `_c`.
        if line.contains("RTCD_EXTERN") && line.contains("(*") {
            if let Some(caps) = POINTER_NAME.captures(line) {
                let name = &caps[1];
                if !defined.contains(name) {
                    out.push(format!("#define {name} {name}_c"));
                    defined.insert(name.to_string());
                }
            }
            continue;
        }

        if trimmed.starts_with("#define") {
            if let Some(caps) = DEFINE_REDIRECT.captures(trimmed) {
                let name = &caps[1];
                let base = &caps[2];
                if !defined.contains(name) {
                    out.push(format!("#define {name} {base}_c"));
                    defined.insert(name.to_string());
                }
                continue;
            }
        }

        // x86-only headers do not exist in the ARM configuration.
        if line.contains("#include")
            && (line.contains("vpx_ports/x86.h") || line.contains("x86/"))
        {
            continue;
        }

        out.push(line.to_string());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_prototypes_dropped() {
        let input = "\
unsigned int vpx_avg_4x4_c(const uint8_t *, int p);
unsigned int vpx_avg_4x4_sse2(const uint8_t *, int p);
unsigned int vpx_avg_8x8_avx2(const uint8_t *, int p);";

        let out = flatten_header(input);

        assert_eq!(out, "unsigned int vpx_avg_4x4_c(const uint8_t *, int p);");
    }

    #[test]
    fn test_pointer_becomes_define() {
        let input = "RTCD_EXTERN unsigned int (*vpx_avg_4x4)(const uint8_t *, int p);";

        assert_eq!(flatten_header(input), "#define vpx_avg_4x4 vpx_avg_4x4_c");
    }

    #[test]
    fn test_forced_variant_define_redirected() {
        let input = "#define vpx_fdct4x4 vpx_fdct4x4_sse2";

        assert_eq!(flatten_header(input), "#define vpx_fdct4x4 vpx_fdct4x4_c");
    }

    #[test]
    fn test_sse4_1_suffix_redirected() {
        let input = "#define vpx_sad4x4 vpx_sad4x4_sse4_1";

        assert_eq!(flatten_header(input), "#define vpx_sad4x4 vpx_sad4x4_c");
    }

    #[test]
    fn test_plain_c_define_untouched() {
        let input = "#define vpx_comp_avg_pred vpx_comp_avg_pred_c";

        assert_eq!(flatten_header(input), input);
    }

    #[test]
    fn test_rtcd_extern_fallback_defines_untouched() {
        let input = "\
#ifdef RTCD_C
#define RTCD_EXTERN
#else
#define RTCD_EXTERN extern
#endif";

        assert_eq!(flatten_header(input), input);
    }

    #[test]
    fn test_duplicate_macro_names_emitted_once() {
        let input = "\
RTCD_EXTERN void (*vpx_foo)(void);
#define vpx_foo vpx_foo_avx2";

        assert_eq!(flatten_header(input), "#define vpx_foo vpx_foo_c");
    }

    #[test]
    fn test_setup_body_emptied() {
        let input = "\
static void setup_rtcd_internal(void)
{
    int flags = x86_simd_caps();

    vpx_avg_4x4 = vpx_avg_4x4_c;
    if (flags & HAS_SSE2) vpx_avg_4x4 = vpx_avg_4x4_sse2;
}
#endif";

        assert_eq!(
            flatten_header(input),
            "static void setup_rtcd_internal(void)\n{\n}\n#endif"
        );
    }

    #[test]
    fn test_x86_includes_dropped() {
        let input = "\
#include \"vpx_ports/x86.h\"
#include \"vpx_dsp/x86/convolve.h\"
#include \"vpx_config.h\"";

        assert_eq!(flatten_header(input), "#include \"vpx_config.h\"");
    }

    #[test]
    fn test_avx512f_suffix_not_in_list_passes_through() {
        // Only the known suffixes are rewritten; unknown variants pass through
        // untouched rather than being half-matched.
        let input = "#define vpx_sad64x64 vpx_sad64x64_avx512f";

        assert_eq!(flatten_header(input), input);
    }
}
