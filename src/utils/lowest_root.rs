use crate::math::Real;
use na::ComplexField;
use num::Zero;

/// Solves `a·t² + b·t + c = 0` and returns its smallest root in the open interval `]0, max_t[`.
///
/// Returns `None` if the equation has no real root, if none of its roots lie in `]0, max_t[`,
/// or if `a` is zero: a linear equation is never solved since, for swept-sphere queries, it
/// means there is no relative motion to speak of.
///
/// Passing the best time found so far as `max_t` makes every subsequent call only accept
/// strictly earlier roots.
pub fn solve_lowest_root(a: Real, b: Real, c: Real, max_t: Real) -> Option<Real> {
    let determinant = b * b - 4.0 * a * c;

    if determinant < 0.0 || a.is_zero() {
        return None;
    }

    let sqrt_d = ComplexField::sqrt(determinant);
    let inv_2a = 1.0 / (2.0 * a);
    let mut r1 = (-b - sqrt_d) * inv_2a;
    let mut r2 = (-b + sqrt_d) * inv_2a;

    if r1 > r2 {
        core::mem::swap(&mut r1, &mut r2);
    }

    if r1 > 0.0 && r1 < max_t {
        Some(r1)
    } else if r2 > 0.0 && r2 < max_t {
        Some(r2)
    } else {
        None
    }
}
