//! Renderer Settings
//!
//! Global configuration consumed once by [`Renderer::new`](super::Renderer::new)
//! plus the per-frame values the sphere pipeline reads every frame.
//!
//! # Fields
//!
//! | Field          | Description                                   | Default         |
//! |----------------|-----------------------------------------------|-----------------|
//! | `vsync`        | Vertical sync enabled                         | `true`          |
//! | `low_power`    | Prefer an integrated GPU                      | `false`         |
//! | `clear_color`  | Framebuffer clear color (RGBA, linear)        | Black (0,0,0,1) |
//! | `mesh_color`   | Solid color written by the fragment shader    | Red (1,0,0,1)   |
//! | `spin_speed`   | Model rotation about the Y axis, radians/sec  | `0.5`           |
//! | `depth_test`   | Allocate a depth buffer and depth-test        | `true`          |
//!
//! # Example
//!
//! ```rust,ignore
//! use uvsphere::renderer::settings::RendererSettings;
//!
//! let settings = RendererSettings {
//!     vsync: false,
//!     spin_speed: 0.0,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Depth buffer format used when [`RendererSettings::depth_test`] is on.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// When `true`, the frame rate is capped to the display refresh rate.
    pub vsync: bool,

    /// Adapter selection: `true` maps to [`wgpu::PowerPreference::LowPower`],
    /// `false` to [`wgpu::PowerPreference::HighPerformance`].
    pub low_power: bool,

    pub clear_color: [f64; 4],

    pub mesh_color: [f32; 4],

    /// Zero freezes the model.
    pub spin_speed: f32,

    /// Without a depth buffer, triangles are drawn in index order, as the
    /// reference program did.
    pub depth_test: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            low_power: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            mesh_color: [1.0, 0.0, 0.0, 1.0],
            spin_speed: 0.5,
            depth_test: true,
        }
    }
}

impl RendererSettings {
    #[inline]
    #[must_use]
    pub fn power_preference(&self) -> wgpu::PowerPreference {
        if self.low_power {
            wgpu::PowerPreference::LowPower
        } else {
            wgpu::PowerPreference::HighPerformance
        }
    }

    #[inline]
    #[must_use]
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    #[must_use]
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }

    #[inline]
    #[must_use]
    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_test.then_some(DEPTH_FORMAT)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.spin_speed.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "spin_speed must be finite, got {}",
                self.spin_speed
            )));
        }
        let channels = self
            .clear_color
            .iter()
            .copied()
            .chain(self.mesh_color.iter().map(|&c| f64::from(c)));
        for c in channels {
            if !(0.0..=1.0).contains(&c) {
                return Err(Error::InvalidParameter(format!(
                    "color channels must be within [0, 1], got {c}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_program() {
        let s = RendererSettings::default();
        assert_eq!(s.mesh_color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.wgpu_clear_color(), wgpu::Color::BLACK);
        assert_eq!(s.present_mode(), wgpu::PresentMode::AutoVsync);
        assert_eq!(s.depth_format(), Some(DEPTH_FORMAT));
    }

    #[test]
    fn power_preference_follows_flag() {
        let s = RendererSettings {
            low_power: true,
            ..Default::default()
        };
        assert_eq!(s.power_preference(), wgpu::PowerPreference::LowPower);
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        let s = RendererSettings {
            mesh_color: [2.0, 0.0, 0.0, 1.0],
            ..Default::default()
        };
        assert!(s.validate().is_err());

        let s = RendererSettings {
            spin_speed: f32::NAN,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }
}
