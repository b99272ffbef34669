//! Error Types
//!
//! This module defines the error type used throughout the viewer.
//!
//! # Overview
//!
//! The main error type [`Error`] covers all failure modes including:
//! - Invalid geometry parameters and out-of-range mesh indices
//! - GPU initialization failures
//! - Shader compilation failures
//! - Configuration loading errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, Error>`.
//!
//! ```rust,ignore
//! use uvsphere::errors::{Error, Result};
//!
//! fn build() -> Result<()> {
//!     let mesh = uvsphere::generate_sphere(1.0, 30, 30)?;
//!     mesh.validate()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the viewer.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// A parameter was rejected before any work was done.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An index buffer entry names a vertex that does not exist.
    #[error(
        "Index out of range: indices[{position}] = {index}, but the mesh has {vertex_count} vertices"
    )]
    IndexOutOfRange {
        /// The offending index value
        index: u32,
        /// Where in the index list it was found
        position: usize,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },

    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create a surface for the window.
    #[error("Failed to create WGPU surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// The adapter cannot present to the window surface.
    #[error("Surface not supported by adapter")]
    SurfaceUnsupported,

    /// Frame acquisition failed in a way that reconfiguring cannot fix.
    #[error("Surface error: {0}")]
    SurfaceError(#[from] wgpu::SurfaceError),

    /// WGSL parse or validation failure.
    #[error("Failed to compile {stage} shader: {message}")]
    ShaderCompile {
        /// `"vertex"` or `"fragment"`
        stage: &'static str,
        /// Diagnostic text produced by the shader front end
        message: String,
    },

    // ========================================================================
    // Window Errors
    // ========================================================================
    /// Window creation failed.
    #[error("Failed to create window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
