//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Plane;

use na::Unit;

/// A triangle shape.
///
/// Triangles carry no identity: they are plain copies of three vertices taken
/// from whatever mesh storage the caller owns.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A vector normal of this triangle, equal to `AB × AC`.
    ///
    /// Its length is twice the triangle area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The plane containing this triangle.
    ///
    /// See [`Plane::from_triangle`] for the behavior on degenerate triangles.
    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::from_triangle(&self.a, &self.b, &self.c)
    }

    /// Does this triangle have a zero area (up to [`DEFAULT_EPSILON`])?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        abs_diff_eq!(
            self.scaled_normal().norm_squared(),
            0.0,
            epsilon = DEFAULT_EPSILON
        )
    }
}
