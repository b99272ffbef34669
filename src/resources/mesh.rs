//! CPU-side mesh data.
//!
//! [`MeshData`] pairs a vertex list with a triangle index list. It is produced
//! by the generators in [`crate::resources::primitives`] and consumed by
//! [`crate::renderer::GpuMesh::upload`].

use crate::errors::{Error, Result};

/// GPU vertex layout: position only, location 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A triangle mesh: positions plus per-vertex normals and UVs, and a `u32`
/// index list where each consecutive triple forms one triangle.
///
/// `normals` and `uvs` are always the same length as `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks that the index list describes whole triangles and only names
    /// vertices that exist.
    ///
    /// Reports the first offending index.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(Error::InvalidParameter(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.vertex_count();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(Error::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Packs positions into the vertex buffer layout.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .map(|&position| Vertex { position })
            .collect()
    }

    /// Largest distance from the origin to any vertex. Zero for an empty mesh.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| glam::Vec3::from_array(*p).length())
            .fold(0.0, f32::max)
    }
}
