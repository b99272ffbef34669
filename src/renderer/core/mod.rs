//! Core GPU handles: device, queue, and window surface.

pub mod context;

pub use context::WgpuContext;
