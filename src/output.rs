//! # Output Module
//!
//! Turns a rendered [`Framebuffer`] into 8-bit pixels and writes them out:
//! - binary PPM (`P6`), written by hand
//! - PNG through the `image` crate, from the same 8-bit pixels
//!
//! ## Quantization
//!
//! Each channel is clamped to [0.0, 1.0] and scaled by 255, then truncated
//! toward zero (not rounded). Reference images depend on the truncation, so
//! 0.4 encodes as 102 and 0.3 as 76.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::{debug, info};

use crate::camera::Framebuffer;
use crate::interval::Interval;

/// Failure to write an image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// File could not be created or written
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// Extension is neither .ppm nor .png
    #[error("Unsupported file extension '{0}'. Only .ppm and .png are supported.")]
    UnsupportedFormat(String),
}

/// Supported output containers, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary PPM (`P6`)
    Ppm,
    /// PNG via the `image` crate
    Png,
}

impl OutputFormat {
    /// Pick the container from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            _ => Err(OutputError::UnsupportedFormat(extension)),
        }
    }
}

/// Convert one linear channel to a byte: clamp, scale, truncate.
#[inline]
pub fn encode_channel(c: f32) -> u8 {
    (255.0 * Interval::UNIT.clamp(c)) as u8
}

/// Quantize a framebuffer to 8 bits per channel.
pub fn quantize(image: &Framebuffer) -> RgbImage {
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([
            encode_channel(pixel[0]),
            encode_channel(pixel[1]),
            encode_channel(pixel[2]),
        ])
    })
}

/// Write `P6\n<width> <height>\n255\n` followed by raw RGB bytes.
pub fn write_ppm<W: Write>(image: &RgbImage, mut out: W) -> std::io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    out.write_all(image.as_raw())?;
    out.flush()
}

/// Full PPM byte stream for a framebuffer.
pub fn encode_ppm(image: &Framebuffer) -> Vec<u8> {
    let pixels = quantize(image);
    let mut bytes = Vec::with_capacity(pixels.as_raw().len() + 32);
    write_ppm(&pixels, &mut bytes).expect("writing to a Vec cannot fail");
    bytes
}

/// Save a framebuffer as binary PPM.
pub fn save_image_as_ppm(image: &Framebuffer, output_path: &Path) -> Result<(), OutputError> {
    let pixels = quantize(image);
    let file = File::create(output_path)?;
    write_ppm(&pixels, BufWriter::new(file))?;
    debug!("Wrote {} pixel bytes", pixels.as_raw().len());
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a framebuffer as PNG with the same quantization as PPM.
pub fn save_image_as_png(image: &Framebuffer, output_path: &Path) -> Result<(), OutputError> {
    quantize(image).save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a framebuffer in the format implied by the path's extension.
pub fn save_image(image: &Framebuffer, output_path: &Path) -> Result<(), OutputError> {
    match OutputFormat::from_path(output_path)? {
        OutputFormat::Ppm => save_image_as_ppm(image, output_path),
        OutputFormat::Png => save_image_as_png(image, output_path),
    }
}
