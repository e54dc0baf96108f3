//! Sphere primitive for ray tracing.
//!
//! Ray-sphere intersection uses the geometric method: project the center onto
//! the ray, then step back and forth by the half chord length.

use glam::Vec3A;

use crate::geometry::dot;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere, always positive.
    pub radius: f32,

    /// Material properties, owned by value.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not a positive finite number.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "sphere radius must be positive, got {radius}"
        );
        Self {
            center,
            radius,
            material,
        }
    }

    /// Distance along `r` to the nearest surface point in front of its origin.
    ///
    /// When the origin is inside the sphere this is the far boundary. A
    /// tangent ray hits at the projection of the center.
    pub fn intersect(&self, r: &Ray) -> Option<f32> {
        let l = self.center - r.origin;
        let tca = dot(l, r.direction);
        let d2 = dot(l, l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;
        if t0 < 0.0 {
            t0 = t1;
        }

        (t0 >= 0.0).then_some(t0)
    }

    /// Outward unit normal at a point on the surface hit by `r`.
    ///
    /// A sphere small enough for the hit point to round onto its center gets
    /// a normal facing back along the ray.
    pub fn normal_at(&self, p: Vec3A, r: &Ray) -> Vec3A {
        ((p - self.center) / self.radius)
            .try_normalize()
            .unwrap_or(-r.direction)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = self.intersect(r).filter(|&t| ray_t.contains(t))?;
        let point = r.at(t);
        Some(HitRecord {
            point,
            normal: self.normal_at(point, r),
            t,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::IVORY;

    const EPS: f32 = 1e-4;

    fn sphere(center: Vec3A, radius: f32) -> Sphere {
        Sphere::new(center, radius, IVORY)
    }

    #[test]
    fn test_aimed_at_center_hits_near_surface() {
        let cases = [
            (Vec3A::ZERO, Vec3A::new(0.0, 0.0, -16.0), 2.0),
            (Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(-4.0, 5.0, 9.0), 1.5),
            (Vec3A::new(0.0, 0.0, 0.0), Vec3A::new(10.0, 0.0, 0.0), 0.1),
        ];
        for (origin, center, radius) in cases {
            let s = sphere(center, radius);
            let ray = Ray::new(origin, center - origin);
            let t = s.intersect(&ray).expect("ray aimed at the center must hit");
            let expected = (center - origin).length() - radius;
            assert!(t > 0.0);
            assert!((t - expected).abs() < EPS, "t = {t}, expected {expected}");
        }
    }

    #[test]
    fn test_origin_inside_hits_far_boundary() {
        let s = sphere(Vec3A::new(0.0, 0.0, -1.0), 3.0);
        for dir in [Vec3A::X, -Vec3A::Y, Vec3A::Z, Vec3A::new(1.0, 1.0, -1.0)] {
            let ray = Ray::new(Vec3A::ZERO, dir);
            let t = s.intersect(&ray).expect("origin inside the sphere must hit");
            assert!(t >= 0.0);
            assert!(((ray.at(t) - s.center).length() - 3.0).abs() < EPS);
        }
    }

    #[test]
    fn test_tangent_ray() {
        let s = sphere(Vec3A::new(0.0, 1.0, -5.0), 1.0);
        // grazes the bottom of the sphere at (0, 0, -5)
        let forward = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        let t = s.intersect(&forward).expect("tangent ray in front hits");
        assert!((t - 5.0).abs() < EPS);

        // same line, pointing away: tca < 0
        let backward = Ray::new(Vec3A::ZERO, Vec3A::Z);
        assert_eq!(s.intersect(&backward), None);
    }

    #[test]
    fn test_miss_outside_cross_section() {
        let s = sphere(Vec3A::new(0.0, 3.0, -5.0), 1.0);
        let ray = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        assert_eq!(s.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let s = sphere(Vec3A::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        assert_eq!(s.intersect(&ray), None);
    }

    #[test]
    fn test_hit_fills_record() {
        let s = sphere(Vec3A::new(0.0, 0.0, -16.0), 2.0);
        let ray = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        let rec = s.hit(&ray, Interval::visible(1000.0)).unwrap();
        assert!((rec.t - 14.0).abs() < EPS);
        assert!((rec.point - Vec3A::new(0.0, 0.0, -14.0)).length() < EPS);
        assert!((rec.normal - Vec3A::Z).length() < EPS);
        assert_eq!(rec.material, IVORY);
    }

    #[test]
    fn test_hit_respects_window() {
        let s = sphere(Vec3A::new(0.0, 0.0, -16.0), 2.0);
        let ray = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        assert!(s.hit(&ray, Interval::visible(10.0)).is_none());
    }

    #[test]
    fn test_normal_at_surface_point() {
        let s = sphere(Vec3A::new(1.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::Y);
        let n = s.normal_at(Vec3A::new(1.0, 2.0, 0.0), &ray);
        assert!((n - Vec3A::Y).length() < EPS);
    }

    #[test]
    fn test_tiny_sphere_hit_has_unit_normal() {
        // t rounds to the center distance, so the hit point is the center
        let s = sphere(Vec3A::new(0.0, 0.0, -1.0), 1e-10);
        let ray = Ray::new(Vec3A::ZERO, -Vec3A::Z);
        let rec = s.hit(&ray, Interval::visible(1000.0)).unwrap();
        assert!((rec.normal.length() - 1.0).abs() < EPS);
        assert!(rec.normal.dot(ray.direction) < 0.0);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_panics() {
        sphere(Vec3A::ZERO, 0.0);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_negative_radius_panics() {
        sphere(Vec3A::ZERO, -1.0);
    }
}
