//! Render and camera settings carried by a scene description.

use serde::{Deserialize, Serialize};

/// How the diffuse bounce direction is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HemisphereSampling {
    /// Uniform over the hemisphere, pdf = 1 / 2π.
    #[default]
    Uniform,
    /// Cosine weighted, pdf = cosθ / π.
    Cosine,
}

/// Largest accepted `strata`, one full cycle is `MAX_STRATA * MAX_STRATA` frames
pub const MAX_STRATA: u32 = 256;

/// How a pixel's sample position is chosen each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelSampling {
    /// Uniform random offset within the whole pixel.
    #[default]
    Jittered,
    /// Frames cycle through a `strata` x `strata` grid of cells, jittering inside each.
    Stratified { strata: u32 },
}

/// Integrator and progressive loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Bounces beyond this depth return black
    pub max_depth: u32,

    /// Radiance of rays leaving the scene (RGB)
    pub background: [f32; 3],

    pub sampling: HemisphereSampling,

    pub pixel_sampling: PixelSampling,

    /// Number of frames after which the progressive loop stops
    pub sample_budget: u32,

    /// Seed for the per-row random streams. Picked at random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: [0.6, 0.6, 0.9],
            sampling: HemisphereSampling::default(),
            pixel_sampling: PixelSampling::default(),
            sample_budget: 3000,
            seed: None,
        }
    }
}

/// Pinhole camera pose and film.
///
/// `direction`, `up` and `right` are expected to form an orthonormal basis. They are
/// used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub width: u32,
    pub height: u32,
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub up: [f32; 3],
    pub right: [f32; 3],

    /// Pinhole to film distance. Defaults to `width / 80`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_distance: Option<f32>,

    /// World space size of one pixel on the film
    pub pixel_step: f32,

    /// Distance covered by one camera move
    pub move_step: f32,
}

impl CameraSettings {
    /// Returns the configured film distance or the `width / 80` default.
    pub fn effective_film_distance(&self) -> f32 {
        self.film_distance.unwrap_or(self.width as f32 / 80.0)
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        let s = std::f32::consts::FRAC_1_SQRT_2;
        Self {
            width: 1280,
            height: 720,
            position: [0.0, 25.0, -25.0],
            direction: [0.0, -s, s],
            up: [0.0, s, s],
            right: [1.0, 0.0, 0.0],
            film_distance: None,
            pixel_step: 0.01,
            move_step: 0.2,
        }
    }
}
