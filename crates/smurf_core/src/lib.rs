//! Smurf Core - Scene descriptions for the smurf path tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ShapeDescription`, `Geometry`
//! - **Settings**: `RenderSettings`, `CameraSettings` with the renderer defaults
//! - **JSON loading** with validation and typed errors
//!
//! # Example
//!
//! ```ignore
//! use smurf_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scenes/demo.json")?;
//! println!("Loaded {} shapes", scene.shapes.len());
//! ```

pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use scene::{
    Geometry, MaterialKind, SceneDescription, SceneError, SceneResult, ShapeDescription,
};
pub use settings::{
    CameraSettings, HemisphereSampling, PixelSampling, RenderSettings, MAX_STRATA,
};
