//! Turning a resolved hit into a color.
//!
//! Misses take the background color. Hits start from the material's diffuse
//! color and, when the scene carries lights, are scaled by the summed
//! Lambertian contribution of every light.

use glam::Vec3A;

use crate::geometry::normalize;
use crate::hittable::{HitRecord, Scene};
use crate::material::Color;

/// Point light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position
    pub position: Vec3A,
    /// Scale applied to the Lambert term
    pub intensity: f32,
}

impl Light {
    /// Light at `position` with the given intensity.
    pub fn new(position: Vec3A, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Single shading stage shared by lit and unlit renders.
#[derive(Debug, Clone, Copy)]
pub struct Shader {
    /// Color returned for rays that hit nothing in range.
    pub background: Color,
}

impl Shader {
    /// Shader falling back to `background` on a miss.
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Color seen along a ray given its nearest hit, if any.
    pub fn shade(&self, scene: &Scene, hit: Option<&HitRecord>) -> Color {
        let Some(rec) = hit else {
            return self.background;
        };

        let base = rec.material.diffuse_color;
        if scene.lights.is_empty() {
            return base;
        }

        base * diffuse_intensity(rec, &scene.lights)
    }
}

/// Lambertian term `Σ intensity * max(0, N·L)` over all lights.
pub fn diffuse_intensity(rec: &HitRecord, lights: &[Light]) -> f32 {
    lights
        .iter()
        .map(|light| {
            let to_light = light.position - rec.point;
            if to_light == Vec3A::ZERO {
                // light sits on the surface point; no defined direction
                return 0.0;
            }
            light.intensity * rec.normal.dot(normalize(to_light)).max(0.0)
        })
        .sum()
}
