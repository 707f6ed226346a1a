use oorandom::Rand64;
use sweep3d::math::{Point, Real, Vector};
use sweep3d::query::details::sweep_sphere_triangles;
use sweep3d::query::{CollisionPacket, SphereSweep, SweepOptions};
use sweep3d::shape::Triangle;

fn rand_point(rng: &mut Rand64, extent: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
    )
}

fn rand_triangles(rng: &mut Rand64, count: usize) -> Vec<Triangle> {
    (0..count)
        .map(|_| {
            let center = rand_point(rng, 6.0);
            Triangle::new(
                center + rand_point(rng, 3.0).coords,
                center + rand_point(rng, 3.0).coords,
                center + rand_point(rng, 3.0).coords,
            )
        })
        .collect()
}

#[test]
fn nearest_distance_never_increases() {
    let mut rng = Rand64::new(0x5eed_cafe);
    let options = SweepOptions::default();
    let mut num_hits = 0;

    for _ in 0..200 {
        let triangles = rand_triangles(&mut rng, 20);
        let mut packet = CollisionPacket::new(rand_point(&mut rng, 8.0), rand_point(&mut rng, 12.0).coords);

        for tri in &triangles {
            let before = packet;
            let updated = tri.sweep_unit_sphere(&mut packet, &options);

            if before.found_collision {
                assert!(packet.found_collision);
                assert!(packet.nearest_distance <= before.nearest_distance);
            }

            if !updated {
                assert_eq!(packet, before);
            }
        }

        if packet.found_collision {
            num_hits += 1;
        }
    }

    // Make sure the scenes above are not trivially empty.
    assert!(num_hits > 0);
}

#[test]
fn fold_keeps_the_nearest_individual_contact() {
    let mut rng = Rand64::new(42);
    let options = SweepOptions::default();

    for _ in 0..200 {
        let triangles = rand_triangles(&mut rng, 10);
        let base_point = rand_point(&mut rng, 8.0);
        let velocity: Vector<Real> = rand_point(&mut rng, 12.0).coords;

        let mut nearest: Option<(Real, Point<Real>)> = None;
        for tri in &triangles {
            let mut single = CollisionPacket::new(base_point, velocity);
            if tri.sweep_unit_sphere(&mut single, &options) {
                match nearest {
                    Some((dist, _)) if dist <= single.nearest_distance => {}
                    _ => nearest = Some((single.nearest_distance, single.intersect_point)),
                }
            }
        }

        let mut packet = CollisionPacket::new(base_point, velocity);
        let updated = sweep_sphere_triangles(&mut packet, triangles.iter().copied(), &options);

        assert_eq!(updated, nearest.is_some());
        assert_eq!(packet.found_collision, nearest.is_some());

        if let Some((dist, point)) = nearest {
            assert_eq!(packet.nearest_distance, dist);
            assert_eq!(packet.intersect_point, point);
        }

        let mut from_slice = CollisionPacket::new(base_point, velocity);
        let _ = triangles[..].sweep_unit_sphere(&mut from_slice, &options);
        assert_eq!(from_slice, packet);
    }
}
