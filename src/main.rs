//! Demo renderer: traces the classic four-sphere scene and saves a PNG,
//! or prints an ASCII preview to the terminal.
//!
//! Usage:
//!   rt-spheres                          - render 600x600 to render.png
//!   rt-spheres -w 800 -H 800 -o out.png - custom size and output path
//!   rt-spheres --ascii -w 100 -H 50     - ASCII preview on stdout

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use image::{Rgb, RgbImage};
use log::info;

use rt_spheres::{render_scene, render_scene_par, Canvas, Scene};

#[derive(Parser)]
#[command(name = "rt-spheres", about = "Minimal CPU ray tracer for sphere scenes")]
struct Args {
    /// Output image width in pixels
    #[arg(short, long, default_value_t = 600)]
    width: usize,

    /// Output image height in pixels
    #[arg(short = 'H', long, default_value_t = 600)]
    height: usize,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Print an ASCII preview to stdout instead of writing an image
    #[arg(long)]
    ascii: bool,

    /// Render single-threaded instead of one row per rayon worker
    #[arg(long)]
    serial: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "raster dimensions must be positive, got {}x{}",
        args.width,
        args.height
    );

    let scene = Scene::four_spheres();
    scene.validate().context("invalid scene")?;

    let mut canvas = Canvas::new(args.width, args.height);

    let start = Instant::now();
    if args.serial {
        render_scene(&scene, &mut canvas);
    } else {
        render_scene_par(&scene, &mut canvas);
    }
    info!(
        "rendered {}x{} ({} spheres, {} lights) in {:.1?}",
        args.width,
        args.height,
        scene.spheres.len(),
        scene.lights.len(),
        start.elapsed()
    );

    if args.ascii {
        print!("{}", canvas.to_ascii());
        return Ok(());
    }

    let mut image = RgbImage::new(args.width as u32, args.height as u32);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let color = canvas.pixel(x as usize, y as usize);
        *pixel = Rgb([color.r, color.g, color.b]);
    }
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());

    Ok(())
}
