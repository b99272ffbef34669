//! Winit-based Application Framework
//!
//! - [`App`]: Builder for configuring and launching the viewer
//! - [`AppRunner`]: Internal event loop handler (not exposed publicly)
//!
//! # Example
//!
//! ```rust,ignore
//! use uvsphere::app::App;
//!
//! fn main() -> uvsphere::Result<()> {
//!     env_logger::init();
//!     App::new()
//!         .with_title("Sphere")
//!         .with_size(1280, 720)
//!         .run()
//! }
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::app::config::AppConfig;
use crate::errors::{Error, Result};
use crate::renderer::{FrameOutcome, Renderer};
use crate::resources::mesh::MeshData;
use crate::resources::primitives::{SphereOptions, create_sphere};
use crate::utils::time::FrameTimer;

/// Application builder for configuring and launching the viewer.
///
/// Use the builder methods to adjust the configuration, then call
/// [`run`](Self::run) to open the window.
pub struct App {
    config: AppConfig,
}

impl App {
    /// Creates a new application builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    #[must_use]
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    #[must_use]
    pub fn with_sphere(mut self, sphere: SphereOptions) -> Self {
        self.config.sphere = sphere;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validates the configuration, generates the mesh, and runs the event
    /// loop until the window closes.
    ///
    /// Nothing is opened if the configuration or the generated geometry is
    /// invalid. A fatal error raised inside the event loop is returned once
    /// the loop has shut down.
    pub fn run(self) -> Result<()> {
        self.config.validate()?;

        let mesh = create_sphere(self.config.sphere)?;
        mesh.validate()?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self.config, mesh);
        event_loop.run_app(&mut runner)?;

        match runner.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal application runner that implements winit's `ApplicationHandler`.
struct AppRunner {
    config: AppConfig,
    mesh: MeshData,

    // Dropped before the window it renders into.
    renderer: Option<Renderer>,
    window: Option<Arc<Window>>,

    timer: FrameTimer,
    error: Option<Error>,
}

impl AppRunner {
    fn new(config: AppConfig, mesh: MeshData) -> Self {
        Self {
            config,
            mesh,
            renderer: None,
            window: None,
            timer: FrameTimer::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("Fatal error: {error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        self.window = Some(window.clone());

        log::info!("Initializing Renderer Backend...");

        let renderer = pollster::block_on(Renderer::new(
            window,
            self.config.render.clone(),
            &self.config.shaders,
            &self.mesh,
        ))?;
        self.renderer = Some(renderer);
        self.timer = FrameTimer::new();

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        if let Some(fps) = self.timer.tick() {
            log::debug!("{fps:.1} fps ({:.2} ms last frame)", self.timer.dt_seconds() * 1000.0);
        }

        match renderer.render(self.timer.elapsed_seconds()) {
            Ok(FrameOutcome::Presented) => {}
            Ok(FrameOutcome::Reconfigured) => {
                log::debug!("Frame {} dropped: surface reconfigured", self.timer.frame_count);
            }
            Ok(FrameOutcome::Skipped) => {
                log::debug!("Frame {} skipped: surface acquire timed out", self.timer.frame_count);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.renderer.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down after {} frames", self.timer.frame_count);
        self.renderer = None;
        self.window = None;
    }
}
