//! Surface materials.
//!
//! Only a diffuse base color exists; shading decides how much light reaches it.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are linear and unbounded until the image is encoded.
pub type Color = Vec3A;

/// Diffuse material, copied by value into every sphere that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Base reflectance color.
    pub diffuse_color: Color,
}

impl Material {
    /// Material with the given diffuse color.
    pub fn new(diffuse_color: Color) -> Self {
        Self { diffuse_color }
    }
}

/// Off-white, from the demo scene.
pub const IVORY: Material = Material {
    diffuse_color: Vec3A::new(0.4, 0.4, 0.3),
};

/// Dark red, from the demo scene.
pub const RED_RUBBER: Material = Material {
    diffuse_color: Vec3A::new(0.3, 0.1, 0.1),
};
