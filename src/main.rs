use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use normalray::{output, RenderError, SceneDescription};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Load the scene, apply command line overrides, render and write the image.
fn run(args: &Args) -> Result<(), RenderError> {
    let scene = match &args.scene {
        Some(path) => SceneDescription::load(path)?,
        None => SceneDescription::default_scene(),
    };
    let world = scene.build_world();
    let mut camera = scene.build_camera();

    if let Some(width) = args.width {
        camera.image_width = width;
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        camera.aspect_ratio = aspect_ratio;
    }
    if let Some(samples_per_pixel) = args.samples_per_pixel {
        camera.samples_per_pixel = samples_per_pixel;
    }
    if args.seed.is_some() {
        camera.seed = args.seed;
    }

    info!(
        "Scene: {} sphere(s), image width {}, aspect ratio {:.4}, samples per pixel: {}",
        world.len(),
        camera.image_width,
        camera.aspect_ratio,
        camera.samples_per_pixel
    );

    match &args.output {
        Some(path) => {
            let image = camera.render(&world)?;
            output::save_image(&image, path)?;
        }
        None => {
            // Logging and progress go to stderr, so stdout carries only the image
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            camera.render_ppm(&world, &mut out)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("normalray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
