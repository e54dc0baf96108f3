//! Camera for ray generation and scene rendering

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::config::{ConfigError, RenderConfig};
use crate::hittable::{Hittable, Scene};
use crate::interval::Interval;
use crate::material::Color;
use crate::ray::Ray;
use crate::shading::Shader;

/// Linear RGB pixels, row-major from the top-left, unclamped.
pub type Framebuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Pinhole camera at the origin looking down -z.
///
/// Every pixel gets exactly one ray through its center, so a render is fully
/// deterministic.
#[derive(Debug, Clone)]
pub struct Camera {
    config: RenderConfig,
    /// Camera position in world space
    center: Vec3A,
    /// tan(fov / 2): half height of the image plane at z = -1
    half_height: f32,
    /// Half width of the image plane at z = -1
    half_width: f32,
    shader: Shader,
}

impl Camera {
    /// Creates a camera for the given settings.
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let half_height = (config.fov.to_radians() / 2.0).tan();
        Ok(Self {
            config,
            center: Vec3A::ZERO,
            half_height,
            half_width: half_height * config.aspect_ratio(),
            shader: Shader::new(config.background),
        })
    }

    /// Settings this camera renders with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the scene, one primary ray per pixel.
    ///
    /// Rows are distributed over the rayon thread pool; each worker writes
    /// only the row it owns.
    pub fn render(&self, scene: &Scene) -> Framebuffer {
        let width = self.config.width;
        let mut image = Framebuffer::new(width, self.config.height);

        info!(
            "Rendering {}x{} using {} CPU cores...",
            width,
            self.config.height,
            rayon::current_num_threads()
        );
        scene.log_summary();
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        let row_len = width as usize * 3;
        image
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let color = self.ray_color(&self.get_ray(i as u32, j as u32), scene);
                    pixel.copy_from_slice(&[color.x, color.y, color.z]);
                }
                pb.inc(width as u64);
            });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Primary ray through the center of pixel `(i, j)`.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f32 + 0.5) / self.config.width as f32 - 1.0) * self.half_width;
        let y = -(2.0 * (j as f32 + 0.5) / self.config.height as f32 - 1.0) * self.half_height;
        Ray::new(self.center, Vec3A::new(x, y, -1.0))
    }

    /// Nearest visible hit along `r`, shaded.
    pub fn ray_color(&self, r: &Ray, scene: &Scene) -> Color {
        let hit = scene.hit(r, Interval::visible(self.config.max_distance));
        self.shader.shade(scene, hit.as_ref())
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.config.pixel_count() as u64);
        match ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Progress bar template rejected: {}", e),
        }
        pb
    }
}

/// Test pattern: red grows downwards, green grows to the right.
pub fn gradient(width: u32, height: u32) -> Framebuffer {
    Framebuffer::from_fn(width, height, |i, j| {
        Rgb([j as f32 / height as f32, i as f32 / width as f32, 0.0])
    })
}
