//! Function to check if a point is inside a triangle.

use crate::math::{Point, Real};

/// Returns `true` if `p` lies inside the triangle with corners `v1`, `v2` and `v3`.
///
/// `p` is assumed to be on the plane of the triangle: only its components along the
/// triangle edges are taken into account, so a point off the plane is tested through
/// its projection. Points exactly on an edge or a vertex count as inside.
///
/// Always returns `false` for a degenerate triangle or if any input is NaN.
pub fn is_point_in_triangle(
    p: &Point<Real>,
    v1: &Point<Real>,
    v2: &Point<Real>,
    v3: &Point<Real>,
) -> bool {
    let e10 = v2 - v1;
    let e20 = v3 - v1;

    let a = e10.norm_squared();
    let b = e10.dot(&e20);
    let c = e20.norm_squared();
    let ac_bb = a * c - b * b;

    let vp = p - v1;
    let d = vp.dot(&e10);
    let e = vp.dot(&e20);

    // Barycentric coordinates scaled by `ac_bb`.
    let x = d * c - e * b;
    let y = e * a - d * b;
    let z = x + y - ac_bb;

    ac_bb > 0.0 && x >= 0.0 && y >= 0.0 && z <= 0.0
}
