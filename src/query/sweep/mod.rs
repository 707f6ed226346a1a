//! Continuous collision detection of a swept unit sphere against triangles.

pub use self::collision_packet::{CollisionPacket, SweepHit};
pub use self::sweep_composite::sweep_sphere_triangles;
pub use self::sweep_sphere_triangle::{sweep_sphere_triangle, sweep_sphere_triangle_with_options};

use crate::query::SweepOptions;

mod collision_packet;
mod sweep_composite;
mod sweep_sphere_triangle;

/// Traits of objects a moving unit sphere can be swept against.
pub trait SphereSweep {
    /// Sweeps the unit sphere of `packet` against `self`, narrowing the nearest contact
    /// recorded in `packet`.
    ///
    /// Returns `true` if the packet was updated.
    fn sweep_unit_sphere(&self, packet: &mut CollisionPacket, options: &SweepOptions) -> bool;
}
