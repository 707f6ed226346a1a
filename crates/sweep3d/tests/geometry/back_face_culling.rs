use approx::assert_relative_eq;
use sweep3d::math::{Point, Vector};
use sweep3d::query::{CollisionPacket, SphereSweep, SweepOptions};
use sweep3d::shape::Triangle;

// Normal pointing toward +z.
fn floor() -> Triangle {
    Triangle::new(
        Point::new(-5.0, -5.0, 0.0),
        Point::new(5.0, -5.0, 0.0),
        Point::new(0.0, 5.0, 0.0),
    )
}

#[test]
fn back_faces_are_tested_by_default() {
    let mut packet = CollisionPacket::new(Point::new(0.0, 0.0, -2.0), Vector::new(0.0, 0.0, 4.0));

    assert!(floor().sweep_unit_sphere(&mut packet, &SweepOptions::default()));
    assert_relative_eq!(packet.nearest_distance, 1.0);
    assert_relative_eq!(packet.intersect_point.x, 0.0);
    assert_relative_eq!(packet.intersect_point.y, 0.0);
}

#[test]
fn back_faces_are_skipped_when_culling() {
    let options = SweepOptions::with_back_face_culling();
    let mut packet = CollisionPacket::new(Point::new(0.0, 0.0, -2.0), Vector::new(0.0, 0.0, 4.0));

    assert!(!floor().sweep_unit_sphere(&mut packet, &options));
    assert!(!packet.found_collision);

    // Front faces are still reported.
    packet.reset(Point::new(0.0, 0.0, 2.0), Vector::new(0.0, 0.0, -4.0));
    assert!(floor().sweep_unit_sphere(&mut packet, &options));
    assert_relative_eq!(packet.nearest_distance, 1.0);
}

#[test]
fn culling_skips_parallel_motion() {
    let options = SweepOptions::with_back_face_culling();
    let mut packet = CollisionPacket::new(Point::new(-8.0, 0.0, 0.0), Vector::new(8.0, 0.0, 0.0));

    assert!(!floor().sweep_unit_sphere(&mut packet, &options));
    assert!(floor().sweep_unit_sphere(&mut packet, &SweepOptions::default()));
}
