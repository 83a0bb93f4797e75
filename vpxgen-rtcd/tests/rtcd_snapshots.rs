//! Snapshot tests for RTCD header flattening.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use vpxgen_core::Codegen;
use vpxgen_rtcd::{Generator, InputHeader, RTCD_HEADERS, load_headers, render_header};

const X86_64_HEADER: &str = r#"#ifndef VPX_DSP_RTCD_H_
#define VPX_DSP_RTCD_H_

#ifdef RTCD_C
#define RTCD_EXTERN
#else
#define RTCD_EXTERN extern
#endif

#include "vpx/vpx_integer.h"

#ifdef __cplusplus
extern "C" {
#endif

unsigned int vpx_avg_4x4_c(const uint8_t *, int p);
unsigned int vpx_avg_4x4_sse2(const uint8_t *, int p);
RTCD_EXTERN unsigned int (*vpx_avg_4x4)(const uint8_t *, int p);

void vpx_comp_avg_pred_c(uint8_t *comp_pred, const uint8_t *pred, int width, int height, const uint8_t *ref, int ref_stride);
#define vpx_comp_avg_pred vpx_comp_avg_pred_c

void vpx_fdct4x4_c(const int16_t *input, tran_low_t *output, int stride);
void vpx_fdct4x4_sse2(const int16_t *input, tran_low_t *output, int stride);
#define vpx_fdct4x4 vpx_fdct4x4_sse2

void vpx_dsp_rtcd(void);

#include "vpx_config.h"

#ifdef RTCD_C
#include "vpx_ports/x86.h"
static void setup_rtcd_internal(void)
{
    int flags = x86_simd_caps();

    (void)flags;

    vpx_avg_4x4 = vpx_avg_4x4_c;
    if (flags & HAS_SSE2) vpx_avg_4x4 = vpx_avg_4x4_sse2;
}
#endif

#ifdef __cplusplus
}  // extern "C"
#endif

#endif
"#;

#[test]
fn test_flattened_header() {
    let flattened = render_header(X86_64_HEADER);
    insta::assert_snapshot!("vpx_dsp_rtcd_arm", flattened);
}

#[test]
fn test_flattened_header_has_no_function_pointers() {
    let flattened = render_header(X86_64_HEADER);

    assert!(!flattened.contains("(*"));
    assert!(!flattened.contains("_sse2"));
    assert!(!flattened.contains("vpx_ports/x86.h"));
    assert!(flattened.contains("#define vpx_avg_4x4 vpx_avg_4x4_c"));
    assert!(flattened.contains("#define vpx_fdct4x4 vpx_fdct4x4_c"));
}

#[test]
fn test_flattened_header_keeps_include_guard() {
    let flattened = render_header(X86_64_HEADER);

    assert!(flattened.contains("#ifndef VPX_DSP_RTCD_H_"));
    assert!(flattened.contains("#define VPX_DSP_RTCD_H_"));
    assert!(flattened.contains("setup_rtcd_internal(void)\n{\n}"));
}

#[test]
fn test_generate_writes_found_headers_and_reports_missing() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();
    std::fs::write(input.path().join("vp8_rtcd.h"), X86_64_HEADER).unwrap();

    let generator = Generator::from_dir(input.path()).unwrap();
    let result = generator.generate(output.path()).unwrap();

    assert_eq!(result.written, vec!["vp8_rtcd.h"]);
    assert_eq!(
        result.skipped,
        vec!["vp9_rtcd.h", "vpx_dsp_rtcd.h", "vpx_scale_rtcd.h"]
    );
    let written = std::fs::read_to_string(output.path().join("vp8_rtcd.h")).unwrap();
    assert!(written.starts_with("/*\n * Auto-generated Generic C RTCD header for ARM64\n"));
}

#[test]
fn test_missing_input_dir_is_fatal() {
    let temp = tempfile::TempDir::new().unwrap();
    let gone = temp.path().join("x86_64");

    let err = load_headers(&gone).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_preview_covers_all_loaded_headers() {
    let headers = RTCD_HEADERS
        .iter()
        .map(|name| InputHeader {
            name: name.to_string(),
            content: X86_64_HEADER.to_string(),
        })
        .collect();

    let generator = Generator::new(headers, Vec::new());
    let files = generator.preview();

    assert_eq!(files.len(), RTCD_HEADERS.len());
    assert_eq!(files[0].path, "vp8_rtcd.h");
    assert_eq!(files[3].path, "vpx_scale_rtcd.h");
}
