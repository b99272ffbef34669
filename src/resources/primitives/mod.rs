pub mod sphere;

pub use sphere::{IndexingMode, SphereOptions, create_sphere, generate_sphere};
