//! Shapes supported by sweep3d.

pub use self::plane::Plane;
pub use self::triangle::Triangle;

#[cfg(feature = "alloc")]
pub use self::collision_mesh::{CollisionMesh, CollisionMeshError};

#[cfg(feature = "alloc")]
mod collision_mesh;
mod plane;
mod triangle;
