#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Procedural UV-sphere generation and a minimal wgpu viewer.
//!
//! The geometry side ([`generate_sphere`], [`create_sphere`], [`MeshData`])
//! is pure and has no GPU dependency at runtime. The viewer side ([`App`],
//! [`Renderer`]) opens a window, uploads the mesh, and draws it every frame.

pub mod app;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod utils;

pub use app::{App, AppConfig, WindowConfig};
pub use errors::{Error, Result};
pub use renderer::{FrameOutcome, Renderer, RendererSettings, ShaderConfig};
pub use renderer::pipeline::ShaderSource;
pub use resources::{IndexingMode, MeshData, SphereOptions, Vertex, create_sphere, generate_sphere};
