use crate::math::Real;

/// Configuration for controlling the behavior of swept-sphere queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepOptions {
    /// Below this absolute value of `normal · velocity`, the sphere is considered as moving
    /// parallel to a triangle plane.
    ///
    /// Defaults to the single-precision machine epsilon.
    pub parallel_epsilon: Real,
    /// If `true`, triangles whose normal does not face the sphere motion are skipped.
    ///
    /// Disabled by default: every triangle is tested regardless of its orientation, which
    /// also catches spheres moving out of a surface they already penetrate.
    pub cull_back_faces: bool,
}

impl SweepOptions {
    /// Creates a [`SweepOptions`] with the default values except for back-face culling,
    /// which is enabled.
    pub fn with_back_face_culling() -> Self {
        Self {
            cull_back_faces: true,
            ..Default::default()
        }
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            parallel_epsilon: f32::EPSILON as Real,
            cull_back_faces: false,
        }
    }
}
