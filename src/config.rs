//! Render configuration passed explicitly into the camera.

use glam::Vec3A;

use crate::material::Color;

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 1024;
/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 768;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 90.0;
/// Default distance beyond which hits are ignored.
pub const DEFAULT_MAX_DISTANCE: f32 = 1000.0;
/// Default sky color.
pub const DEFAULT_BACKGROUND: Color = Vec3A::new(0.2, 0.7, 0.8);

/// Everything the raster driver needs besides the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Full vertical field of view in degrees
    pub fov: f32,
    /// Color of pixels whose ray hits nothing in range
    pub background: Color,
    /// Visibility bound: hits at this distance or further count as misses
    pub max_distance: f32,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov: DEFAULT_FOV,
            background: DEFAULT_BACKGROUND,
            max_distance: DEFAULT_MAX_DISTANCE,
            show_progress: false,
        }
    }
}

impl RenderConfig {
    /// Config for a `width` x `height` image with the remaining defaults.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Number of pixels in the output image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.fov.is_nan() || self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(ConfigError::FieldOfView(self.fov));
        }
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(ConfigError::MaxDistance(self.max_distance));
        }
        Ok(())
    }
}

/// Settings rejected before rendering.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Width or height is zero
    #[error("Image must have nonzero size, got {width}x{height}")]
    EmptyImage {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Field of view outside (0, 180) degrees
    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    FieldOfView(f32),

    /// Visibility bound not positive
    #[error("Visibility distance must be positive, got {0}")]
    MaxDistance(f32),

    /// Color string that is not an `R,G,B` triple
    #[error("Invalid color '{0}', expected three comma-separated numbers")]
    Color(String),
}

/// Parse an `R,G,B` triple such as `0.2,0.7,0.8`.
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::Color(s.to_string()))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Vec3A::new(*r, *g, *b)),
        _ => Err(ConfigError::Color(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pixel_count(), 1024 * 768);
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = RenderConfig::with_size(0, 10).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyImage { width: 0, height: 10 }));
    }

    #[test]
    fn test_fov_range() {
        for fov in [0.0, -5.0, 180.0, f32::NAN] {
            let config = RenderConfig {
                fov,
                ..RenderConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))));
        }
    }

    #[test]
    fn test_max_distance_must_be_positive() {
        for max_distance in [0.0, -1.0, f32::NAN] {
            let config = RenderConfig {
                max_distance,
                ..RenderConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::MaxDistance(_))));
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("0.2,0.7,0.8").unwrap(), Vec3A::new(0.2, 0.7, 0.8));
        assert_eq!(parse_color(" 1, 0 ,0.5").unwrap(), Vec3A::new(1.0, 0.0, 0.5));
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("a,b,c").is_err());
        assert!(parse_color("1,2,3,4").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Color("red".to_string());
        assert!(err.to_string().contains("red"));
    }
}
