//! Definition of the plane supporting a triangle.

use crate::math::{Point, Real, Vector};

/// An infinite plane given by one of its points and its normal.
///
/// The implicit form `A·x + B·y + C·z + D = 0` is cached in [`Plane::equation`],
/// with `(A, B, C)` being the normal and `D = -normal · origin`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// A point on the plane.
    pub origin: Point<Real>,
    /// The plane normal.
    ///
    /// Unit-length when built with [`Plane::from_triangle`]. Stored as given by
    /// [`Plane::new`].
    pub normal: Vector<Real>,
    /// The coefficients `[A, B, C, D]` of the implicit plane equation.
    pub equation: [Real; 4],
}

impl Plane {
    /// Builds a plane from one of its points and its normal.
    ///
    /// The normal is stored verbatim, it is not normalized.
    #[inline]
    pub fn new(origin: Point<Real>, normal: Vector<Real>) -> Plane {
        let d = -normal.dot(&origin.coords);
        Plane {
            origin,
            normal,
            equation: [normal.x, normal.y, normal.z, d],
        }
    }

    /// Builds the plane containing the triangle `abc`.
    ///
    /// The normal is the normalized `AB × AC`. A zero-area triangle produces a
    /// NaN normal: every query on such a plane yields NaN.
    #[inline]
    pub fn from_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Plane {
        let normal = (b - a).cross(&(c - a)).normalize();
        Plane::new(*a, normal)
    }

    /// The signed distance from `point` to this plane.
    ///
    /// Positive in front of the plane (on the side its normal points to), negative behind it.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        point.coords.dot(&self.normal) - self.normal.dot(&self.origin.coords)
    }

    /// Is this plane facing a motion along `direction`?
    ///
    /// Returns `true` if `direction` points against the plane normal.
    #[inline]
    pub fn is_front_facing(&self, direction: &Vector<Real>) -> bool {
        self.normal.dot(direction) < 0.0
    }
}
