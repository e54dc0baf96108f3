use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use tinyray::config::{
    parse_color, ConfigError, RenderConfig, DEFAULT_FOV, DEFAULT_HEIGHT, DEFAULT_MAX_DISTANCE,
    DEFAULT_WIDTH,
};
use tinyray::Color;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "tinyray")]
#[command(about = "A tiny sphere ray tracer writing PPM images")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, help = "Image height in pixels")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = DEFAULT_FOV, help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Background color as R,G,B in [0, 1]
    #[arg(long, value_parser = parse_color, default_value = "0.2,0.7,0.8", help = "Background color as R,G,B")]
    pub background: Color,

    /// Hits at this distance or beyond are treated as misses
    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE, help = "Maximum visible distance")]
    pub max_distance: f32,

    /// Output file path (.ppm for binary PPM, .png for PNG with identical pixels)
    #[arg(short, long, default_value = "out.ppm", help = "Output file path (.ppm or .png)")]
    pub output: PathBuf,

    /// Light the demo scene with a point light
    #[arg(long, help = "Light the demo scene with a point light")]
    pub lights: bool,

    /// Write the gradient test pattern instead of rendering the scene
    #[arg(long, help = "Write the gradient test pattern instead of rendering")]
    pub gradient: bool,

    /// Number of worker threads (defaults to one per core)
    #[arg(long, short = 'j', help = "Number of worker threads")]
    pub threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,
}

impl Args {
    /// Render settings described by the arguments.
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let config = RenderConfig {
            width: self.width,
            height: self.height,
            fov: self.fov,
            background: self.background,
            max_distance: self.max_distance,
            show_progress: !self.no_progress,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tinyray"]);
        let config = args.render_config().unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.fov, 90.0);
        assert_eq!(config.max_distance, 1000.0);
        assert!(config.show_progress);
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert!(!args.lights && !args.gradient);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "tinyray",
            "--width",
            "320",
            "--height",
            "200",
            "--fov",
            "60",
            "--background",
            "0,0,0",
            "--no-progress",
            "-o",
            "scene.png",
            "--threads",
            "1",
        ]);
        let config = args.render_config().unwrap();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.fov, 60.0);
        assert_eq!(config.background, Color::ZERO);
        assert!(!config.show_progress);
        assert_eq!(args.threads, Some(1));
    }

    #[test]
    fn test_bad_background_rejected() {
        assert!(Args::try_parse_from(["tinyray", "--background", "red"]).is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        let args = Args::parse_from(["tinyray", "--width", "0"]);
        assert!(args.render_config().is_err());
    }
}
