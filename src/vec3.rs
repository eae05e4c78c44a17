//! Vector algebra for the renderer.
//!
//! Every 3D quantity (displacement, point, color) is a `glam::DVec3`. Points and
//! colors use their own aliases so signatures say what a value means.

use glam::DVec3;

/// Three-component f64 vector used for directions and displacements.
pub type Vec3 = DVec3;

/// A location in world space.
pub type Point3 = DVec3;

/// Linear RGB color, each channel nominally in [0, 1].
pub type Color = DVec3;

/// Scale a vector to unit length.
///
/// Divides by `v.length()`. The caller must not pass a zero-length vector: the
/// result is then NaN in every component, and nothing here checks for it.
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}
