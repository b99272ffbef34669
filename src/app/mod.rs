//! Windowing and the render loop.

pub mod config;
pub mod winit;

pub use config::{AppConfig, WindowConfig};
pub use self::winit::App;
