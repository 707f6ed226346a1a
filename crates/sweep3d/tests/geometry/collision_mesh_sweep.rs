use approx::assert_relative_eq;
use oorandom::Rand64;
use sweep3d::math::{Point, Real, Vector};
use sweep3d::query::{CollisionPacket, SphereSweep, SweepOptions};
use sweep3d::shape::{CollisionMesh, Triangle};

fn room() -> CollisionMesh {
    let floor = vec![
        Point::new(-20.0, -20.0, 0.0),
        Point::new(20.0, -20.0, 0.0),
        Point::new(20.0, 20.0, 0.0),
        Point::new(-20.0, -20.0, 0.0),
        Point::new(20.0, 20.0, 0.0),
        Point::new(-20.0, 20.0, 0.0),
    ];
    // Facing -x.
    let wall = [
        Point::new(5.0, -20.0, -20.0),
        Point::new(5.0, 20.0, 20.0),
        Point::new(5.0, 20.0, -20.0),
        Point::new(5.0, -20.0, -20.0),
        Point::new(5.0, -20.0, 20.0),
        Point::new(5.0, 20.0, 20.0),
    ];

    let mut mesh = CollisionMesh::new(floor).unwrap();
    mesh.append(&wall).unwrap();
    mesh
}

#[test]
fn sphere_hits_the_wall_before_the_floor() {
    let mesh = room();
    let velocity = Vector::new(8.0, 0.0, -1.0);
    let mut packet = CollisionPacket::new(Point::new(0.0, 0.0, 3.0), velocity);

    assert!(mesh.sweep_unit_sphere(&mut packet, &SweepOptions::default()));

    let hit = packet.nearest_hit().unwrap();
    assert_relative_eq!(hit.time_of_impact, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(hit.distance, 0.5 * velocity.norm(), epsilon = 1.0e-9);
    assert_relative_eq!(hit.point, Point::new(5.0, 0.0, 2.5), epsilon = 1.0e-9);
}

#[test]
fn sphere_landing_on_the_floor() {
    let mesh = room();
    let mut packet = CollisionPacket::new(Point::new(-3.0, 2.0, 4.0), Vector::new(1.0, 0.0, -6.0));

    assert!(mesh.sweep_unit_sphere(&mut packet, &SweepOptions::default()));

    let hit = packet.nearest_hit().unwrap();
    assert_relative_eq!(hit.time_of_impact, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(hit.point, Point::new(-2.5, 2.0, 0.0), epsilon = 1.0e-9);
}

#[test]
fn sweep_outside_of_the_mesh_region() {
    let mesh = room();
    let mut packet = CollisionPacket::new(Point::new(0.0, 0.0, 50.0), Vector::new(3.0, 3.0, 3.0));

    assert!(!mesh.sweep_unit_sphere(&mut packet, &SweepOptions::default()));
    assert!(!packet.found_collision);
}

#[test]
fn mesh_sweep_matches_exhaustive_sweep() {
    let mut rng = Rand64::new(1234);
    let mut coord = |extent: Real| (rng.rand_float() * 2.0 - 1.0) * extent;

    let mut vertices = Vec::new();
    for _ in 0..60 {
        let center = Vector::new(coord(10.0), coord(10.0), coord(10.0));
        for _ in 0..3 {
            vertices.push(Point::new(coord(2.0), coord(2.0), coord(2.0)) + center);
        }
    }

    let mesh = CollisionMesh::new(vertices).unwrap();
    let triangles: Vec<Triangle> = mesh.triangles().collect();
    let options = SweepOptions::default();

    for _ in 0..100 {
        let base_point = Point::new(coord(10.0), coord(10.0), coord(10.0));
        let velocity = Vector::new(coord(10.0), coord(10.0), coord(10.0));

        let mut filtered = CollisionPacket::new(base_point, velocity);
        let mut exhaustive = filtered;

        let _ = mesh.sweep_unit_sphere(&mut filtered, &options);
        let _ = triangles[..].sweep_unit_sphere(&mut exhaustive, &options);

        assert_eq!(filtered, exhaustive);
    }
}
