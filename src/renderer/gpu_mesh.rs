use wgpu::util::DeviceExt;

use crate::errors::{Error, Result};
use crate::resources::mesh::{MeshData, Vertex};

/// Static vertex + index buffer pair for one mesh.
///
/// Both buffers are released when the value is dropped, including when a
/// later initialization step fails and unwinds through `?`.
#[derive(Debug)]
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Uploads `mesh` after checking that every index names an existing
    /// vertex. Nothing is allocated on the device if the check fails.
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Result<Self> {
        mesh.validate()?;
        if mesh.indices.is_empty() {
            return Err(Error::InvalidParameter("mesh has no triangles".into()));
        }

        let index_count = u32::try_from(mesh.index_count()).map_err(|_| {
            Error::InvalidParameter(format!(
                "{} indices exceed a single indexed draw",
                mesh.index_count()
            ))
        })?;
        let vertex_count = u32::try_from(mesh.vertex_count()).map_err(|_| {
            Error::InvalidParameter(format!(
                "{} vertices exceed u32 addressing",
                mesh.vertex_count()
            ))
        })?;

        let vertices: Vec<Vertex> = mesh.vertices();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Uploaded mesh: {vertex_count} vertices, {} triangles",
            index_count / 3
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
