use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::resources::mesh::MeshData;

/// How triangle indices are laid over the latitude/longitude vertex grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexingMode {
    /// One quad per grid cell, two triangles each. Every index is in range and
    /// the slice seam is closed by the duplicated seam column.
    #[default]
    Corrected,
    /// Reproduces the reference renderer's index sequence exactly.
    ///
    /// It walks a flat range of `slices * (stacks + 1)` cells using a row
    /// stride of `slices` in one triangle and `slices + 1` in the other, so it
    /// crosses row ends and can name vertices past the end of the buffer.
    /// Run [`MeshData::validate`] before uploading.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereOptions {
    pub radius: f32,
    /// Latitude bands, pole to pole.
    pub stacks: u32,
    /// Longitude divisions around the Z axis.
    pub slices: u32,
    pub indexing: IndexingMode,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            stacks: 30,
            slices: 30,
            indexing: IndexingMode::Corrected,
        }
    }
}

impl SphereOptions {
    /// Rejects parameters the generator cannot turn into a closed sphere.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sphere radius must be a positive finite number, got {}",
                self.radius
            )));
        }
        if self.stacks == 0 {
            return Err(Error::InvalidParameter(
                "sphere stacks must be at least 1".into(),
            ));
        }
        if self.slices == 0 {
            return Err(Error::InvalidParameter(
                "sphere slices must be at least 1".into(),
            ));
        }

        let vertex_count = (u64::from(self.stacks) + 1) * (u64::from(self.slices) + 1);
        // legacy indexing reaches `slices` past the last cell
        let highest_index = match self.indexing {
            IndexingMode::Corrected => vertex_count - 1,
            IndexingMode::Legacy => vertex_count + u64::from(self.slices),
        };
        if vertex_count > u64::from(u32::MAX) || highest_index > u64::from(u32::MAX) {
            return Err(Error::InvalidParameter(format!(
                "{}x{} sphere needs {vertex_count} vertices, more than a u32 index can address",
                self.stacks, self.slices
            )));
        }

        Ok(())
    }
}

/// Generates a UV sphere centered on the origin with its poles on the Z axis.
///
/// Vertices are laid out row-major: the vertex at stack `s`, slice `t` sits at
/// `s * (slices + 1) + t`. Pole and seam vertices are duplicated once per
/// column. Triangles are clockwise when seen from outside the sphere.
pub fn create_sphere(options: SphereOptions) -> Result<MeshData> {
    options.validate()?;

    let SphereOptions {
        radius,
        stacks,
        slices,
        indexing,
    } = options;

    let vertex_count = (stacks as usize + 1) * (slices as usize + 1);
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = v * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let theta = u * TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let normal = [sin_phi * cos_theta, sin_phi * sin_theta, cos_phi];

            positions.push([
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                radius * cos_phi,
            ]);
            normals.push(normal);
            uvs.push([u, v]);
        }
    }

    let indices = match indexing {
        IndexingMode::Corrected => corrected_indices(stacks, slices),
        IndexingMode::Legacy => legacy_indices(stacks, slices),
    };

    log::debug!(
        "Generated sphere r={radius} {stacks}x{slices} ({indexing:?}): {} vertices, {} indices",
        positions.len(),
        indices.len()
    );

    Ok(MeshData {
        positions,
        normals,
        uvs,
        indices,
    })
}

/// Shorthand for [`create_sphere`] with [`IndexingMode::Corrected`].
pub fn generate_sphere(radius: f32, stacks: u32, slices: u32) -> Result<MeshData> {
    create_sphere(SphereOptions {
        radius,
        stacks,
        slices,
        indexing: IndexingMode::Corrected,
    })
}

fn corrected_indices(stacks: u32, slices: u32) -> Vec<u32> {
    let ring = slices + 1;
    let mut indices = Vec::with_capacity(stacks as usize * slices as usize * 6);

    for s in 0..stacks {
        for t in 0..slices {
            let i0 = s * ring + t;
            let i1 = i0 + 1;
            let i2 = i0 + ring;
            let i3 = i2 + 1;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i1, i3, i2]);
        }
    }

    indices
}

fn legacy_indices(stacks: u32, slices: u32) -> Vec<u32> {
    let cells = slices * stacks + slices;
    let mut indices = Vec::with_capacity(cells as usize * 6);

    for i in 0..cells {
        indices.extend_from_slice(&[i, i + slices + 1, i + slices]);
        indices.extend_from_slice(&[i + slices + 1, i, i + 1]);
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrected_index_count() {
        assert_eq!(corrected_indices(3, 5).len(), 3 * 5 * 6);
    }

    #[test]
    fn legacy_sequence_starts_like_reference() {
        // slices = 2: first cell is (0, 3, 2) then (3, 0, 1)
        let indices = legacy_indices(2, 2);
        assert_eq!(&indices[..6], &[0, 3, 2, 3, 0, 1]);
        assert_eq!(indices.len(), 6 * (2 * 2 + 2));
    }

    #[test]
    fn first_corrected_quad() {
        // ring = 3
        let indices = corrected_indices(2, 2);
        assert_eq!(&indices[..6], &[0, 1, 3, 1, 4, 3]);
    }

    #[test]
    fn huge_grid_is_rejected_before_allocating() {
        let opts = SphereOptions {
            stacks: u32::MAX,
            slices: 2,
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn vertex_count_of_exactly_two_pow_32_is_rejected() {
        // 65536 * 65536 vertices, one more than a u32 count can hold
        for indexing in [IndexingMode::Corrected, IndexingMode::Legacy] {
            let opts = SphereOptions {
                stacks: 65535,
                slices: 65535,
                indexing,
                ..Default::default()
            };
            assert!(matches!(opts.validate(), Err(Error::InvalidParameter(_))));
            assert!(matches!(create_sphere(opts), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn largest_addressable_grid_passes_validation() {
        // 65536 * 65535 = 2^32 - 65536 vertices
        let opts = SphereOptions {
            stacks: 65535,
            slices: 65534,
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
    }
}
