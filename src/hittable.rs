//! Ray-object intersection and nearest-hit scene resolution.
//!
//! Defines the Hittable trait, the HitRecord produced by a successful test and
//! the Scene: a flat, ordered list of spheres plus the lights that shade them.

use glam::Vec3A;
use log::debug;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::shading::Light;
use crate::sphere::Sphere;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub point: Vec3A,
    /// Outward surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Material of the object at the hit point
    pub material: Material,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so one scene can be shared by every
/// render worker without locking.
pub trait Hittable: Sync + Send {
    /// Nearest intersection whose distance lies in `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of spheres and lights forming a scene.
///
/// Uses linear search for intersection testing. Sphere order matters: when
/// two spheres are hit at exactly the same distance the earlier one wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Spheres in insertion order
    pub spheres: Vec<Sphere>,
    /// Point lights; empty means unlit, diffuse-only shading
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Build and add a sphere from its raw parts.
    pub fn add_sphere(&mut self, center: Vec3A, radius: f32, color: Vec3A) {
        self.add(Sphere::new(center, radius, Material::new(color)));
    }

    /// Add a point light.
    pub fn add_light(&mut self, position: Vec3A, intensity: f32) {
        self.lights.push(Light::new(position, intensity));
    }

    /// True when the scene holds no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Log the scene contents at debug level.
    pub fn log_summary(&self) {
        debug!(
            "Scene: {} spheres, {} lights",
            self.spheres.len(),
            self.lights.len()
        );
        for (index, sphere) in self.spheres.iter().enumerate() {
            debug!(
                "  sphere {}: center {:?} radius {} color {:?}",
                index, sphere.center, sphere.radius, sphere.material.diffuse_color
            );
        }
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        // The window shrinks to the best distance so far, so equal distances
        // later in the list are rejected.
        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
