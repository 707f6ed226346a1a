use sweep3d::math::{Point, Vector};
use sweep3d::query::{CollisionPacket, SphereSweep, SweepOptions};
use sweep3d::shape::CollisionMesh;

fn main() {
    // A ramp going up along +x, made of two triangles.
    let ramp = CollisionMesh::new(vec![
        Point::new(0.0, -5.0, 0.0),
        Point::new(10.0, -5.0, 5.0),
        Point::new(10.0, 5.0, 5.0),
        Point::new(0.0, -5.0, 0.0),
        Point::new(10.0, 5.0, 5.0),
        Point::new(0.0, 5.0, 0.0),
    ])
    .unwrap();

    let options = SweepOptions::default();
    let mut packet = CollisionPacket::new(Point::new(2.0, 0.0, 6.0), Vector::new(3.0, 0.0, -6.0));
    let _ = ramp.sweep_unit_sphere(&mut packet, &options);

    match packet.nearest_hit() {
        Some(hit) => println!(
            "Contact at {:?} after {:.3} of the sweep ({:.3} units).",
            hit.point, hit.time_of_impact, hit.distance
        ),
        None => println!("No contact."),
    }

    // A packet must be reset before being used for another query.
    packet.reset(Point::new(2.0, 0.0, 6.0), Vector::new(0.0, 0.0, 2.0));
    let _ = ramp.sweep_unit_sphere(&mut packet, &options);
    assert!(packet.nearest_hit().is_none());
}
