//! Shader sources and compilation.
//!
//! WGSL is parsed and validated with `naga` on the CPU before it reaches the
//! device, so a broken shader surfaces as [`Error::ShaderCompile`] instead of
//! an uncaptured device error.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Built-in flat-color shader with `vs_main` and `fs_main` entry points.
pub const BUILTIN_SHADER: &str = include_str!("shaders/sphere.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Self::Vertex => naga::ShaderStage::Vertex,
            Self::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// Where a stage's WGSL comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderSource {
    #[default]
    Builtin,
    Inline(String),
    File(PathBuf),
}

impl ShaderSource {
    /// Returns the WGSL text, reading it from disk for [`ShaderSource::File`].
    pub fn resolve(&self) -> Result<Cow<'_, str>> {
        match self {
            Self::Builtin => Ok(Cow::Borrowed(BUILTIN_SHADER)),
            Self::Inline(source) => Ok(Cow::Borrowed(source)),
            Self::File(path) => {
                log::debug!("Loading shader from {}", path.display());
                Ok(Cow::Owned(std::fs::read_to_string(path)?))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: ShaderSource,
    pub fragment: ShaderSource,
    pub vertex_entry: String,
    pub fragment_entry: String,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex: ShaderSource::Builtin,
            fragment: ShaderSource::Builtin,
            vertex_entry: "vs_main".into(),
            fragment_entry: "fs_main".into(),
        }
    }
}

impl ShaderConfig {
    pub fn validate(&self) -> Result<()> {
        for (stage, entry) in [
            (ShaderStage::Vertex, &self.vertex_entry),
            (ShaderStage::Fragment, &self.fragment_entry),
        ] {
            if entry.trim().is_empty() {
                return Err(Error::InvalidParameter(format!(
                    "{} shader entry point must not be empty",
                    stage.name()
                )));
            }
        }
        Ok(())
    }
}

/// Parses and validates `source`, and checks that it exports `entry_point`
/// for `stage`.
pub fn validate_wgsl(stage: ShaderStage, source: &str, entry_point: &str) -> Result<()> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| Error::ShaderCompile {
        stage: stage.name(),
        message: e.emit_to_string(source),
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| Error::ShaderCompile {
            stage: stage.name(),
            message: e.emit_to_string(source),
        })?;

    let found = module
        .entry_points
        .iter()
        .any(|ep| ep.stage == stage.naga_stage() && ep.name == entry_point);
    if !found {
        return Err(Error::ShaderCompile {
            stage: stage.name(),
            message: format!("no @{} entry point named `{entry_point}`", stage.name()),
        });
    }

    Ok(())
}

/// A validated vertex/fragment module pair. Both modules are released when
/// the program is dropped.
#[derive(Debug)]
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
    pub vertex_entry: String,
    pub fragment_entry: String,
}

impl ShaderProgram {
    pub fn compile(device: &wgpu::Device, config: &ShaderConfig) -> Result<Self> {
        config.validate()?;

        let vs_source = config.vertex.resolve()?;
        validate_wgsl(ShaderStage::Vertex, &vs_source, &config.vertex_entry)?;
        let vertex = create_module(device, "Sphere Vertex Shader", &vs_source);

        let fs_source = config.fragment.resolve()?;
        validate_wgsl(ShaderStage::Fragment, &fs_source, &config.fragment_entry)?;
        let fragment = if fs_source == vs_source {
            vertex.clone()
        } else {
            create_module(device, "Sphere Fragment Shader", &fs_source)
        };

        log::info!(
            "Compiled shader program ({} / {})",
            config.vertex_entry,
            config.fragment_entry
        );

        Ok(Self {
            vertex,
            fragment,
            vertex_entry: config.vertex_entry.clone(),
            fragment_entry: config.fragment_entry.clone(),
        })
    }
}

fn create_module(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Owned(source.to_owned())),
    })
}
