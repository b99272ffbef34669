//! Utility Module
//!
//! - [`FrameTimer`]: Frame timing and frame rate measurement

pub mod time;

pub use time::FrameTimer;
