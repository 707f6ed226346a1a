/*!
sweep3d
========

**sweep3d** is a narrow-phase continuous collision detection library: it computes
when and where a unit sphere moving along a straight line first touches a set of
triangles.

The sphere lives in *e-space*, i.e., a space scaled so that the moving ellipsoid
becomes a sphere of radius 1. Converting geometry to and from e-space, as well as
finding which triangles are worth testing, is left to the caller.

```
use sweep3d::math::{Point, Vector};
use sweep3d::query::{CollisionPacket, SphereSweep, SweepOptions};
use sweep3d::shape::Triangle;

let floor = Triangle::new(
    Point::new(-5.0, -5.0, 0.0),
    Point::new(5.0, -5.0, 0.0),
    Point::new(0.0, 5.0, 0.0),
);
let mut packet = CollisionPacket::new(Point::new(0.0, 0.0, 2.0), Vector::new(0.0, 0.0, -4.0));
floor.sweep_unit_sphere(&mut packet, &SweepOptions::default());

let hit = packet.nearest_hit().unwrap();
assert!((hit.time_of_impact - 0.25).abs() < 1.0e-9);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
