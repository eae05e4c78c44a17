//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line in 3D space
//! used for intersection testing.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
///
/// The direction is not required to be normalized, and a zero direction is not
/// rejected here. Keeping rays non-degenerate is up to whoever builds them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
