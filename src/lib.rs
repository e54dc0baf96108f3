//! tinyray: a tiny offline ray tracer
//!
//! Casts one ray per pixel from a fixed pinhole camera into a flat list of
//! spheres, shades the nearest hit and writes the image as binary PPM.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod geometry;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod ray;
pub mod shading;
pub mod sphere;

pub use camera::{Camera, Framebuffer};
pub use config::RenderConfig;
pub use hittable::{HitRecord, Hittable, Scene};
pub use material::{Color, Material};
pub use shading::{Light, Shader};
pub use sphere::Sphere;
