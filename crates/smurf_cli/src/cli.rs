use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use smurf_core::{HemisphereSampling, SceneDescription};
use smurf_renderer::Movement;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Camera moves applied before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoveArg {
    Left,
    Right,
    Forward,
    Backward,
}

impl From<MoveArg> for Movement {
    fn from(m: MoveArg) -> Self {
        match m {
            MoveArg::Left => Movement::Left,
            MoveArg::Right => Movement::Right,
            MoveArg::Forward => Movement::Forward,
            MoveArg::Backward => Movement::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplingArg {
    Uniform,
    Cosine,
}

impl From<SamplingArg> for HemisphereSampling {
    fn from(s: SamplingArg) -> Self {
        match s {
            SamplingArg::Uniform => HemisphereSampling::Uniform,
            SamplingArg::Cosine => HemisphereSampling::Cosine,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "smurf")]
#[command(about = "A progressive Monte Carlo path tracer")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in demo scene when omitted.
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of progressive frames, overrides the scene's sample budget
    #[arg(long, short = 'n')]
    pub frames: Option<u32>,

    /// Output image path
    #[arg(short, long, default_value = "smurf.png")]
    pub output: PathBuf,

    /// Also save the image every N frames
    #[arg(long, value_name = "N")]
    pub snapshot_every: Option<u32>,

    /// Seed for the random streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Move the camera before rendering, may be repeated
    #[arg(long = "move", value_enum, value_name = "DIRECTION")]
    pub moves: Vec<MoveArg>,

    /// Diffuse bounce sampling strategy
    #[arg(long, value_enum)]
    pub sampling: Option<SamplingArg>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Write the effective scene description as JSON
    #[arg(long, value_name = "PATH")]
    pub dump_scene: Option<PathBuf>,
}

impl Args {
    /// Apply the command line overrides to a scene description.
    pub fn apply_overrides(&self, desc: &mut SceneDescription) {
        if let Some(width) = self.width {
            desc.camera.width = width;
        }
        if let Some(height) = self.height {
            desc.camera.height = height;
        }
        if let Some(frames) = self.frames {
            desc.render.sample_budget = frames;
        }
        if let Some(seed) = self.seed {
            desc.render.seed = Some(seed);
        }
        if let Some(sampling) = self.sampling {
            desc.render.sampling = sampling.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["smurf"]).unwrap();
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("smurf.png"));
        assert_eq!(args.log_level, LogLevel::Info);
        assert!(args.moves.is_empty());

        let mut desc = SceneDescription::demo();
        args.apply_overrides(&mut desc);
        assert_eq!(desc, SceneDescription::demo());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "smurf",
            "scene.json",
            "--width",
            "64",
            "--height",
            "32",
            "--frames",
            "10",
            "--seed",
            "5",
            "--sampling",
            "cosine",
            "--move",
            "left",
            "--move",
            "forward",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(args.moves, vec![MoveArg::Left, MoveArg::Forward]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);

        let mut desc = SceneDescription::demo();
        args.apply_overrides(&mut desc);
        assert_eq!(desc.camera.width, 64);
        assert_eq!(desc.camera.height, 32);
        assert_eq!(desc.render.sample_budget, 10);
        assert_eq!(desc.render.seed, Some(5));
        assert_eq!(desc.render.sampling, HemisphereSampling::Cosine);
    }

    #[test]
    fn test_bad_move() {
        assert!(Args::try_parse_from(["smurf", "--move", "up"]).is_err());
    }

    #[test]
    fn test_move_conversion() {
        assert_eq!(Movement::from(MoveArg::Backward), Movement::Backward);
        assert_eq!(Movement::from(MoveArg::Right), Movement::Right);
    }
}
