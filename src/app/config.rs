//! Application configuration.
//!
//! Every recognized option lives in [`AppConfig`]. Each section carries
//! `#[serde(default)]`, so a JSON file only has to name what it changes:
//!
//! ```json
//! {
//!     "window": { "title": "Globe", "width": 1280, "height": 720 },
//!     "sphere": { "stacks": 64, "slices": 128, "indexing": "legacy" },
//!     "shaders": { "fragment": { "file": "shaders/shaded.wgsl" } },
//!     "render": { "vsync": false, "spin_speed": 0.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::renderer::pipeline::ShaderConfig;
use crate::renderer::settings::RendererSettings;
use crate::resources::primitives::SphereOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels
    pub width: u32,
    /// Logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".into(),
            width: 640,
            height: 480,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidParameter(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sphere: SphereOptions,
    pub shaders: ShaderConfig,
    pub render: RendererSettings,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every section. Shader files are not read here; a missing file
    /// is reported when the renderer compiles the shaders.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.sphere.validate()?;
        self.shaders.validate()?;
        self.render.validate()?;
        Ok(())
    }
}
