//! Everything a progressive render needs, owned in one place.

use smurf_core::SceneDescription;

use crate::camera::Movement;
use crate::error::RenderResult;
use crate::{frame, Camera, DisplayBuffer, Film, RenderConfig, Scene};

/// Scene, camera, film and settings of a progressive render.
///
/// Camera moves go through [RenderContext::move_camera] so the film is never averaged
/// over two camera poses.
pub struct RenderContext {
    pub scene: Scene,
    pub camera: Camera,
    pub film: Film,
    pub config: RenderConfig,
    pub seed: u64,
    /// Number of frames after which the render counts as done
    pub sample_budget: u32,
}

impl RenderContext {
    /// Create a context with a black film matching the camera resolution.
    pub fn new(
        scene: Scene,
        camera: Camera,
        config: RenderConfig,
        seed: u64,
        sample_budget: u32,
    ) -> RenderResult<Self> {
        let film = Film::new(camera.width(), camera.height())?;
        Ok(Self {
            scene,
            camera,
            film,
            config,
            seed,
            sample_budget,
        })
    }

    /// Validate a description and build a context from it.
    ///
    /// Without a seed in the description a random one is used.
    pub fn from_description(desc: &SceneDescription) -> RenderResult<Self> {
        desc.validate()?;

        let seed = desc.render.seed.unwrap_or_else(rand::random);
        log::debug!("Using seed {}", seed);

        Self::new(
            Scene::from_description(desc),
            Camera::from_settings(&desc.camera),
            RenderConfig::from(&desc.render),
            seed,
            desc.render.sample_budget,
        )
    }

    /// Add one sample to every pixel.
    pub fn render_frame(&mut self) {
        frame::render_frame(&self.scene, &self.camera, &mut self.film, &self.config, self.seed);
    }

    pub fn display_buffer(&self) -> DisplayBuffer {
        self.film.display_buffer()
    }

    pub fn iteration(&self) -> u32 {
        self.film.iteration()
    }

    /// Move the camera and restart accumulation.
    pub fn move_camera(&mut self, movement: Movement, d: f32) {
        self.camera.apply(movement, d);
        self.film.reset();
        log::debug!("Camera moved {:?} to {:?}", movement, self.camera.position);
    }

    /// Drop all accumulated samples.
    pub fn reset(&mut self) {
        self.film.reset();
    }

    /// Returns true once the film holds `sample_budget` frames.
    pub fn budget_exhausted(&self) -> bool {
        self.film.frames() >= self.sample_budget
    }
}
