//! Non-persistent geometric queries.
//!
//! The main query of this crate is the sweep of a unit sphere against triangles. Its state
//! and result live in a [`CollisionPacket`], updated in place by every triangle test:
//!
//! * [`SphereSweep::sweep_unit_sphere`] sweeps against a [`Triangle`](crate::shape::Triangle),
//!   a slice of triangles, or a [`CollisionMesh`](crate::shape::CollisionMesh).
//! * [`details::sweep_sphere_triangle`] is the underlying test against three vertices.

pub use self::sweep::{CollisionPacket, SphereSweep, SweepHit};
pub use self::sweep_options::SweepOptions;

mod sweep;
mod sweep_options;

/// Queries dedicated to specific shapes.
pub mod details {
    pub use super::sweep::{
        sweep_sphere_triangle, sweep_sphere_triangle_with_options, sweep_sphere_triangles,
    };
}
