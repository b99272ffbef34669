//! Shader Tests
//!
//! Tests for:
//! - Built-in WGSL passing naga validation with both entry points
//! - Diagnostics for malformed shaders and missing entry points
//! - Resolving shader sources from disk
//!
//! Module creation needs a device and is not covered here.

use std::io::Write;

use uvsphere::Error;
use uvsphere::renderer::pipeline::shader::{
    BUILTIN_SHADER, ShaderSource, ShaderStage, validate_wgsl,
};

const SOLID_BLUE: &str = r"
struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@fragment
fn blue() -> @location(0) vec4<f32> {
    return vec4<f32>(0.0, 0.0, 1.0, 1.0);
}
";

// ============================================================================
// Built-in Shader
// ============================================================================

#[test]
fn builtin_shader_validates() {
    validate_wgsl(ShaderStage::Vertex, BUILTIN_SHADER, "vs_main").unwrap();
    validate_wgsl(ShaderStage::Fragment, BUILTIN_SHADER, "fs_main").unwrap();
}

#[test]
fn builtin_shader_declares_globals_block() {
    assert!(BUILTIN_SHADER.contains("@group(0) @binding(0)"));
    assert!(BUILTIN_SHADER.contains("@location(0) position: vec3<f32>"));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn syntax_error_is_reported_with_stage() {
    let err = validate_wgsl(ShaderStage::Vertex, "fn broken( {", "vs_main").unwrap_err();
    match err {
        Error::ShaderCompile { stage, message } => {
            assert_eq!(stage, "vertex");
            assert!(!message.is_empty());
        }
        other => panic!("expected ShaderCompile, got {other:?}"),
    }
}

#[test]
fn type_error_fails_validation() {
    let source = r"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return 1.0;
}
";
    assert!(matches!(
        validate_wgsl(ShaderStage::Fragment, source, "fs_main"),
        Err(Error::ShaderCompile { stage: "fragment", .. })
    ));
}

#[test]
fn missing_entry_point_is_reported() {
    let err = validate_wgsl(ShaderStage::Fragment, SOLID_BLUE, "fs_main").unwrap_err();
    match err {
        Error::ShaderCompile { message, .. } => assert!(message.contains("fs_main")),
        other => panic!("expected ShaderCompile, got {other:?}"),
    }

    validate_wgsl(ShaderStage::Fragment, SOLID_BLUE, "blue").unwrap();
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn file_source_is_read_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SOLID_BLUE.as_bytes()).unwrap();

    let source = ShaderSource::File(file.path().to_path_buf());
    let text = source.resolve().unwrap();
    assert_eq!(text, SOLID_BLUE);
    validate_wgsl(ShaderStage::Fragment, &text, "blue").unwrap();
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = ShaderSource::File(dir.path().join("missing.wgsl"));
    assert!(matches!(source.resolve(), Err(Error::IoError(_))));
}

#[test]
fn inline_source_is_returned_verbatim() {
    let source = ShaderSource::Inline(SOLID_BLUE.to_string());
    assert_eq!(source.resolve().unwrap(), SOLID_BLUE);
}
