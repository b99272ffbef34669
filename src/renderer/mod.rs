//! GPU side of the viewer.
//!
//! [`Renderer`] owns every GPU object for the lifetime of the window: the
//! [`WgpuContext`], the uploaded [`GpuMesh`], and the [`SpherePipeline`].
//! Each of them releases its handles on drop, so an error part-way through
//! [`Renderer::new`] leaves nothing behind.

pub mod core;
pub mod gpu_mesh;
pub mod pipeline;
pub mod settings;

use std::sync::Arc;

use winit::window::Window;

use crate::errors::Result;
use crate::resources::mesh::MeshData;

pub use self::core::WgpuContext;
pub use self::gpu_mesh::GpuMesh;
pub use self::pipeline::{Globals, ShaderConfig, ShaderProgram, SpherePipeline};
pub use self::settings::RendererSettings;

/// What a call to [`Renderer::render`] did with the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was lost or outdated and has been reconfigured.
    Reconfigured,
    /// Acquisition timed out; try again next frame.
    Skipped,
}

pub struct Renderer {
    settings: RendererSettings,
    // Field order is drop order: pipeline and buffers before the device.
    pipeline: SpherePipeline,
    mesh: GpuMesh,
    bounding_radius: f32,
    context: WgpuContext,
}

impl Renderer {
    /// Creates the GPU context for `window`, compiles the shaders, and
    /// uploads `mesh`.
    pub async fn new(
        window: Arc<Window>,
        settings: RendererSettings,
        shaders: &ShaderConfig,
        mesh: &MeshData,
    ) -> Result<Self> {
        let size = window.inner_size();
        let context = WgpuContext::new(window, &settings, size.width, size.height).await?;

        let mesh_buffers = GpuMesh::upload(&context.device, mesh)?;
        let program = ShaderProgram::compile(&context.device, shaders)?;
        let pipeline = SpherePipeline::new(
            &context.device,
            &program,
            context.color_format(),
            context.depth_format,
        );

        log::info!(
            "Renderer ready: {}x{} {:?}, depth test {}",
            context.config.width,
            context.config.height,
            context.color_format(),
            if settings.depth_test { "on" } else { "off" }
        );

        Ok(Self {
            settings,
            pipeline,
            mesh: mesh_buffers,
            bounding_radius: mesh.bounding_radius(),
            context,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resize to {width}x{height}");
        self.context.resize(width, height);
    }

    /// Clears the frame, draws the mesh, and presents.
    ///
    /// `time` is the number of seconds since the window opened.
    pub fn render(&mut self, time: f32) -> Result<FrameOutcome> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.context.reconfigure();
                return Ok(FrameOutcome::Reconfigured);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("Surface acquire timed out, skipping frame");
                return Ok(FrameOutcome::Skipped);
            }
            Err(e) => return Err(e.into()),
        };

        let globals = Globals::new(self.context.size(), self.bounding_radius, time, &self.settings);
        self.pipeline.update(&self.context.queue, &globals);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sphere Frame Encoder"),
            });

        {
            let depth_stencil_attachment =
                self.context
                    .depth_view()
                    .map(|depth_view| wgpu::RenderPassDepthStencilAttachment {
                        view: depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Discard,
                        }),
                        stencil_ops: None,
                    });

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sphere Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.settings.wgpu_clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.pipeline.bind(&mut pass);
            self.mesh.draw(&mut pass);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(FrameOutcome::Presented)
    }
}
