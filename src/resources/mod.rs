pub mod mesh;
pub mod primitives;

pub use mesh::{MeshData, Vertex};
pub use primitives::{IndexingMode, SphereOptions, create_sphere, generate_sphere};
