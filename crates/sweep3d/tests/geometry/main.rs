mod back_face_culling;
#[cfg(feature = "alloc")]
mod collision_mesh_sweep;
mod monotonic_narrowing;
