use crate::query::details::sweep_sphere_triangle_with_options;
use crate::query::{CollisionPacket, SphereSweep, SweepOptions};
use crate::shape::Triangle;

#[cfg(feature = "alloc")]
use crate::shape::CollisionMesh;

/// Sweeps the unit sphere of `packet` against a sequence of triangles.
///
/// This folds [`sweep_sphere_triangle_with_options`] over `triangles`, in order, so that
/// `packet` ends up holding the nearest contact among all of them.
///
/// Returns `true` if at least one triangle updated the packet.
pub fn sweep_sphere_triangles<I>(
    packet: &mut CollisionPacket,
    triangles: I,
    options: &SweepOptions,
) -> bool
where
    I: IntoIterator<Item = Triangle>,
{
    triangles.into_iter().fold(false, |updated, tri| {
        sweep_sphere_triangle_with_options(packet, &tri.a, &tri.b, &tri.c, options) || updated
    })
}

impl SphereSweep for Triangle {
    #[inline]
    fn sweep_unit_sphere(&self, packet: &mut CollisionPacket, options: &SweepOptions) -> bool {
        sweep_sphere_triangle_with_options(packet, &self.a, &self.b, &self.c, options)
    }
}

impl SphereSweep for [Triangle] {
    fn sweep_unit_sphere(&self, packet: &mut CollisionPacket, options: &SweepOptions) -> bool {
        sweep_sphere_triangles(packet, self.iter().copied(), options)
    }
}

#[cfg(feature = "alloc")]
impl SphereSweep for CollisionMesh {
    /// Only the triangles whose [`Aabb`](crate::bounding_volume::Aabb) intersects the
    /// volume swept by the sphere are tested, in index order.
    fn sweep_unit_sphere(&self, packet: &mut CollisionPacket, options: &SweepOptions) -> bool {
        let swept_aabb = packet.swept_aabb();

        if !self.aabb().intersects(&swept_aabb) {
            return false;
        }

        let candidates = (0..self.num_triangles())
            .filter(|i| self.triangle_aabb(*i).intersects(&swept_aabb))
            .map(|i| self.triangle(i));

        sweep_sphere_triangles(packet, candidates, options)
    }
}
