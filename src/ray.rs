//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line used for
//! intersection testing.

use glam::Vec3A;

use crate::geometry::normalize;

/// Ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,

    /// Unit direction vector.
    ///
    /// Hit parameters returned by intersection tests are distances along the
    /// ray, which only holds while this stays normalized.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is the zero vector.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self {
            origin,
            direction: normalize(direction),
        }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
