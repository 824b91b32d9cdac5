//! Renderer errors.

use smurf_core::SceneError;
use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Film of {width}x{height} pixels has no area")]
    EmptyFilm { width: u32, height: u32 },

    #[error("Cannot write {format:?} images, use a .png output path")]
    UnsupportedOutput { format: image::ImageFormat },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
