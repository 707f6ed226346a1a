use crate::math::{Point, Real, Vector};
use crate::query::{CollisionPacket, SweepOptions};
use crate::shape::Plane;
use crate::utils::{is_point_in_triangle, solve_lowest_root};

/// Sweeps the unit sphere of `packet` against the triangle `p1p2p3`, with default options.
///
/// See [`sweep_sphere_triangle_with_options`].
#[inline]
pub fn sweep_sphere_triangle(
    packet: &mut CollisionPacket,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
) -> bool {
    sweep_sphere_triangle_with_options(packet, p1, p2, p3, &SweepOptions::default())
}

/// Sweeps the unit sphere of `packet` against the triangle `p1p2p3`.
///
/// The sphere starts at `packet.base_point` and moves by `packet.velocity` over the time
/// interval `[0, 1]`. If it touches the triangle strictly nearer than the contact already
/// recorded in `packet` (or if no contact was recorded yet), the packet is updated.
///
/// Contacts are searched in this order:
/// 1. The triangle interior, at the time the sphere reaches the triangle plane. A contact found
///    there is final: vertices and edges are not tested.
/// 2. The vertices `p1`, `p2`, `p3`.
/// 3. The edges `p1p2`, `p2p3`, `p3p1`.
///
/// Among vertices and edges, the earliest contact wins; on equal times, the first one tested
/// is kept.
///
/// Returns `true` if the packet was updated.
pub fn sweep_sphere_triangle_with_options(
    packet: &mut CollisionPacket,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    options: &SweepOptions,
) -> bool {
    let plane = Plane::from_triangle(p1, p2, p3);

    if options.cull_back_faces && !plane.is_front_facing(&packet.velocity) {
        return false;
    }

    let signed_dist_to_plane = plane.signed_distance(&packet.base_point);
    let normal_dot_vel = plane.normal.dot(&packet.velocity);

    let (t0, embedded_in_plane) = match plane_contact_start(
        signed_dist_to_plane,
        normal_dot_vel,
        options.parallel_epsilon,
    ) {
        Some(start) => start,
        None => return false,
    };

    let contact = if embedded_in_plane {
        None
    } else {
        face_contact(packet, &plane, t0, p1, p2, p3)
    };

    let contact = contact.or_else(|| feature_contact(packet, p1, p2, p3));

    match contact {
        Some((t, point)) => {
            let dist_to_contact = t * packet.velocity.norm();
            packet.record_contact(dist_to_contact, point)
        }
        None => false,
    }
}

/// Computes when the sphere starts touching the triangle plane.
///
/// Returns the clamped start time of the contact interval, and whether the sphere moves
/// parallel to the plane while intersecting it (in which case the interval is the whole
/// `[0, 1]`). Returns `None` if the sphere does not touch the plane during the sweep.
fn plane_contact_start(
    signed_dist_to_plane: Real,
    normal_dot_vel: Real,
    parallel_epsilon: Real,
) -> Option<(Real, bool)> {
    if normal_dot_vel.abs() < parallel_epsilon {
        if signed_dist_to_plane.abs() >= 1.0 {
            None
        } else {
            Some((0.0, true))
        }
    } else {
        let inv_normal_dot_vel = 1.0 / normal_dot_vel;
        let mut t0 = (-1.0 - signed_dist_to_plane) * inv_normal_dot_vel;
        let mut t1 = (1.0 - signed_dist_to_plane) * inv_normal_dot_vel;

        if t0 > t1 {
            core::mem::swap(&mut t0, &mut t1);
        }

        // Written so that NaN intervals (from degenerate triangles) are rejected too.
        if !(t0 <= 1.0 && t1 >= 0.0) {
            return None;
        }

        Some((t0.clamp(0.0, 1.0), false))
    }
}

/// Contact with the triangle interior, at the time `t0` the sphere reaches the plane.
fn face_contact(
    packet: &CollisionPacket,
    plane: &Plane,
    t0: Real,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
) -> Option<(Real, Point<Real>)> {
    let plane_intersection = packet.base_point - plane.normal + packet.velocity * t0;

    if is_point_in_triangle(&plane_intersection, p1, p2, p3) {
        Some((t0, plane_intersection))
    } else {
        None
    }
}

/// Earliest contact with the vertices, then the edges, of the triangle.
fn feature_contact(
    packet: &CollisionPacket,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
) -> Option<(Real, Point<Real>)> {
    let base = &packet.base_point;
    let velocity = &packet.velocity;
    let velocity_sq_len = velocity.norm_squared();

    let mut t = 1.0;
    let mut contact = None;

    // a·t² + b·t + c = 0 with |base + velocity·t - vertex| = 1
    for vertex in [p1, p2, p3] {
        let b = 2.0 * velocity.dot(&(base - vertex));
        let c = (vertex - base).norm_squared() - 1.0;

        if let Some(new_t) = solve_lowest_root(velocity_sq_len, b, c, t) {
            t = new_t;
            contact = Some(*vertex);
        }
    }

    for (from, to) in [(p1, p2), (p2, p3), (p3, p1)] {
        if let Some((new_t, point)) = edge_contact(base, velocity, velocity_sq_len, from, to, t) {
            t = new_t;
            contact = Some(point);
        }
    }

    contact.map(|point| (t, point))
}

/// Contact with the segment `from -> to` strictly before `max_t`.
fn edge_contact(
    base: &Point<Real>,
    velocity: &Vector<Real>,
    velocity_sq_len: Real,
    from: &Point<Real>,
    to: &Point<Real>,
    max_t: Real,
) -> Option<(Real, Point<Real>)> {
    let edge = from - to;
    let base_to_vertex = to - base;
    let edge_sq_len = edge.norm_squared();
    let edge_dot_velocity = edge.dot(velocity);
    let edge_dot_base_to_vertex = edge.dot(&base_to_vertex);

    // Contact with the infinite line supporting the edge.
    let a = edge_sq_len * -velocity_sq_len + edge_dot_velocity * edge_dot_velocity;
    let b = edge_sq_len * (2.0 * velocity.dot(&base_to_vertex))
        - 2.0 * edge_dot_velocity * edge_dot_base_to_vertex;
    let c = edge_sq_len * (1.0 - base_to_vertex.norm_squared())
        + edge_dot_base_to_vertex * edge_dot_base_to_vertex;

    let new_t = solve_lowest_root(a, b, c, max_t)?;

    // Is the contact within the segment?
    let f = (edge_dot_velocity * new_t - edge_dot_base_to_vertex) / edge_sq_len;
    if f >= 0.0 && f <= 1.0 {
        Some((new_t, to + edge * f))
    } else {
        None
    }
}
