//! Sphere render pipeline.
//!
//! One bind group (group 0) with a single uniform buffer of [`Globals`], one
//! vertex buffer slot carrying positions, and the shader pair from
//! [`ShaderProgram`].

pub mod shader;

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::renderer::settings::RendererSettings;
use crate::resources::mesh::Vertex;

pub use shader::{ShaderConfig, ShaderProgram, ShaderSource, ShaderStage, validate_wgsl};

/// Per-frame uniform block, mirrored by `Globals` in `sphere.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Globals {
    #[must_use]
    pub fn new(
        size: (u32, u32),
        bounding_radius: f32,
        time: f32,
        settings: &RendererSettings,
    ) -> Self {
        Self {
            view_proj: build_view_proj(size, bounding_radius).to_cols_array_2d(),
            model: build_model(time, settings.spin_speed).to_cols_array_2d(),
            color: settings.mesh_color,
        }
    }
}

/// Perspective camera on the +Z axis looking at the origin, far enough back
/// to frame a sphere of `bounding_radius`.
#[must_use]
pub fn build_view_proj((width, height): (u32, u32), bounding_radius: f32) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    let distance = 3.0 * bounding_radius.max(1e-3);

    let eye = Vec3::new(0.0, 0.0, distance);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(45.0_f32.to_radians(), aspect, distance * 0.01, distance * 10.0);

    proj * view
}

/// Stands the mesh's Z-axis poles upright along +Y, then spins it about Y.
#[must_use]
pub fn build_model(time: f32, spin_speed: f32) -> Mat4 {
    Mat4::from_rotation_y(time * spin_speed) * Mat4::from_rotation_x(-FRAC_PI_2)
}

pub struct SpherePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
    pub uniform_buffer: wgpu::Buffer,
}

impl SpherePipeline {
    pub fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sphere Globals Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<Globals>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sphere Globals Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sphere Globals BindGroup"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sphere Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sphere Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &program.vertex,
                entry_point: Some(program.vertex_entry.as_str()),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &program.fragment,
                entry_point: Some(program.fragment_entry.as_str()),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // Generated triangles wind clockwise seen from outside; both faces
            // are drawn.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Cw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            bind_group,
            uniform_buffer,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, globals: &Globals) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(globals));
    }

    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn globals_match_wgsl_layout() {
        // mat4 + mat4 + vec4
        assert_eq!(std::mem::size_of::<Globals>(), 64 + 64 + 16);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let clip = build_view_proj((640, 480), 1.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn whole_sphere_is_inside_the_frustum() {
        let view_proj = build_view_proj((640, 480), 2.0);
        for p in [
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, -2.0),
        ] {
            let clip = view_proj * p.extend(1.0);
            let ndc = clip / clip.w;
            assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{p} -> {ndc}");
            assert!((0.0..=1.0).contains(&ndc.z), "{p} -> {ndc}");
        }
    }

    #[test]
    fn model_puts_north_pole_up() {
        let pole = build_model(0.0, 1.0).transform_point3(Vec3::Z);
        assert!((pole - Vec3::Y).length() < 1e-5);

        // spinning about Y keeps the pole in place
        let pole = build_model(3.0, 0.7).transform_point3(Vec3::Z);
        assert!((pole - Vec3::Y).length() < 1e-5);
    }
}
