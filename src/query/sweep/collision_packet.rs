use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// The nearest contact found by a swept-sphere query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepHit {
    /// The distance travelled by the sphere center before the contact, i.e.,
    /// `time_of_impact * |velocity|`.
    pub distance: Real,
    /// The fraction of the sweep after which the contact happens, in `[0, 1]`.
    pub time_of_impact: Real,
    /// The contact point.
    pub point: Point<Real>,
}

/// The state of one swept-sphere query: the moving unit sphere and the nearest contact
/// found so far.
///
/// A packet is created for one moving sphere, then threaded by mutable reference through
/// the tests of every candidate triangle. Each test only ever makes the recorded contact
/// nearer. Once all triangles have been tested, the caller reads the result with
/// [`CollisionPacket::nearest_hit`] (or directly from the public fields).
///
/// All quantities are expressed in e-space, where the sphere has a radius of 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionPacket {
    /// The sphere center at the start of the sweep.
    pub base_point: Point<Real>,
    /// The sphere displacement over the whole sweep.
    pub velocity: Vector<Real>,
    /// Whether any tested triangle produced a contact.
    pub found_collision: bool,
    /// Distance from `base_point`, along `velocity`, to the nearest contact.
    ///
    /// Only meaningful if `found_collision` is `true`.
    pub nearest_distance: Real,
    /// The point of the nearest contact.
    ///
    /// Only meaningful if `found_collision` is `true`.
    pub intersect_point: Point<Real>,
}

impl CollisionPacket {
    /// Initializes a query for a unit sphere centered at `base_point` moving by `velocity`.
    pub fn new(base_point: Point<Real>, velocity: Vector<Real>) -> Self {
        Self {
            base_point,
            velocity,
            found_collision: false,
            nearest_distance: Real::MAX,
            intersect_point: Point::origin(),
        }
    }

    /// Reinitializes this packet for a new query, discarding any recorded contact.
    pub fn reset(&mut self, base_point: Point<Real>, velocity: Vector<Real>) {
        *self = Self::new(base_point, velocity);
    }

    /// The nearest contact found so far, if any.
    pub fn nearest_hit(&self) -> Option<SweepHit> {
        if !self.found_collision {
            return None;
        }

        let speed = self.velocity.norm();
        let time_of_impact = if speed > 0.0 {
            self.nearest_distance / speed
        } else {
            0.0
        };

        Some(SweepHit {
            distance: self.nearest_distance,
            time_of_impact,
            point: self.intersect_point,
        })
    }

    /// The [`Aabb`] of the volume swept by the unit sphere during the whole query.
    pub fn swept_aabb(&self) -> Aabb {
        Aabb::from_points([self.base_point, self.base_point + self.velocity]).loosened(1.0)
    }

    /// Records a contact at `distance` if it is the first one or if it is strictly nearer
    /// than the recorded one.
    ///
    /// Returns `true` if the packet was updated.
    pub(crate) fn record_contact(&mut self, distance: Real, point: Point<Real>) -> bool {
        if !self.found_collision || distance < self.nearest_distance {
            self.nearest_distance = distance;
            self.intersect_point = point;
            self.found_collision = true;
            true
        } else {
            false
        }
    }
}
