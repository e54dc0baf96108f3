use clap::Parser;
use glam::Vec3A;
use log::{error, info, warn};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use tinyray::camera::{gradient, Camera};
use tinyray::material::{IVORY, RED_RUBBER};
use tinyray::output::save_image;
use tinyray::{Scene, Sphere};

/// Four spheres in front of the camera, two of each material.
fn create_scene(with_lights: bool) -> Scene {
    let mut scene = Scene::new();

    scene.add(Sphere::new(Vec3A::new(-3.0, 0.0, -16.0), 2.0, IVORY));
    scene.add(Sphere::new(Vec3A::new(-1.0, -1.5, -12.0), 2.0, RED_RUBBER));
    scene.add(Sphere::new(Vec3A::new(1.5, -0.5, -18.0), 3.0, RED_RUBBER));
    scene.add(Sphere::new(Vec3A::new(7.0, 5.0, -18.0), 4.0, IVORY));

    if with_lights {
        scene.add_light(Vec3A::new(-20.0, 20.0, 20.0), 1.5);
    }

    scene
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("tinyray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = match args.render_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            warn!("Could not size thread pool to {}: {}", threads, e);
        }
    }

    let image = if args.gradient {
        info!("Writing {}x{} gradient test pattern", config.width, config.height);
        gradient(config.width, config.height)
    } else {
        let camera = match Camera::new(config) {
            Ok(camera) => camera,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };
        camera.render(&create_scene(args.lights))
    };

    if let Err(e) = save_image(&image, &args.output) {
        error!("{}", e);
        std::process::exit(1);
    }
}
