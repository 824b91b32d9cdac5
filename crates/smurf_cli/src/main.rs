mod cli;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use smurf_core::SceneDescription;
use smurf_renderer::{DisplayBuffer, RenderContext};

use crate::cli::Args;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// `out.png` becomes `out_00042.png` for iteration 42.
fn snapshot_path(output: &Path, iteration: u32) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("smurf");
    let name = match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{:05}.{}", stem, iteration, ext),
        None => format!("{}_{:05}", stem, iteration),
    };
    output.with_file_name(name)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting smurf");

    DisplayBuffer::check_output_path(&args.output)
        .with_context(|| format!("Bad output path {}", args.output.display()))?;

    let mut desc = match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            SceneDescription::demo()
        }
    };
    args.apply_overrides(&mut desc);

    if let Some(path) = &args.dump_scene {
        std::fs::write(path, desc.to_json_pretty()?)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
        log::info!("Wrote scene description to {}", path.display());
    }

    let mut ctx = RenderContext::from_description(&desc).context("Failed to set up render")?;

    for m in &args.moves {
        let step = ctx.camera.move_step();
        ctx.move_camera((*m).into(), step);
    }

    log::info!(
        "Rendering {} shapes at {}x{}, {} frames, max depth {}, {:?} sampling",
        ctx.scene.len(),
        ctx.film.width(),
        ctx.film.height(),
        ctx.sample_budget,
        ctx.config.max_depth,
        ctx.config.sampling
    );

    let start = Instant::now();
    while !ctx.budget_exhausted() {
        let frame_start = Instant::now();
        ctx.render_frame();
        let iteration = ctx.film.frames();

        log::debug!(
            "Iteration {} took {:.1} ms",
            iteration,
            frame_start.elapsed().as_secs_f64() * 1000.0
        );

        if let Some(every) = args.snapshot_every.filter(|n| *n > 0) {
            if iteration % every == 0 {
                let path = snapshot_path(&args.output, iteration);
                ctx.display_buffer()
                    .save(&path)
                    .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
                log::info!("Iteration {}: saved {}", iteration, path.display());
            }
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    log::info!(
        "Finished {} frames in {:.2} s ({:.1} ms/frame)",
        ctx.film.frames(),
        elapsed,
        elapsed * 1000.0 / ctx.film.frames().max(1) as f64
    );

    ctx.display_buffer()
        .save(&args.output)
        .with_context(|| format!("Failed to save image {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
