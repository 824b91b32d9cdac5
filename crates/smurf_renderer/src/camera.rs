//! Pinhole camera for ray generation.
//!
//! Pixels map to a flat film `film_distance` in front of the pinhole. Every pixel covers
//! `pixel_step` world units on the film, so the field of view follows from the film size.

use rand::RngCore;
use smurf_core::CameraSettings;
use smurf_math::{Point3, Ray, RayDifferential, Vector3};

use crate::gen_f32;

/// Start of camera rays, keeps the pinhole itself from counting as a hit
pub const CAMERA_RAY_EPSILON: f32 = 1e-6;

/// World down, used to derive the strafe direction independent of camera roll
const DOWN: Vector3 = Vector3 {
    x: 0.0,
    y: -1.0,
    z: 0.0,
};

/// A first-person camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Forward,
    Backward,
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3,
    /// View direction (unit length)
    pub direction: Vector3,
    pub up: Vector3,
    pub right: Vector3,

    // Film
    width: u32,
    height: u32,
    film_distance: f32,
    pixel_step: f32,
    move_step: f32,
}

impl Camera {
    /// Create a camera with the default film distance (`width / 80`) and pixel step.
    ///
    /// `direction`, `up` and `right` are used as given and should be orthonormal.
    pub fn new(
        position: Point3,
        direction: Vector3,
        up: Vector3,
        right: Vector3,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            position,
            direction,
            up,
            right,
            width,
            height,
            film_distance: width as f32 / 80.0,
            pixel_step: 0.01,
            move_step: 0.2,
        }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(
            Point3::from(settings.position),
            Vector3::from(settings.direction),
            Vector3::from(settings.up),
            Vector3::from(settings.right),
            settings.width,
            settings.height,
        )
        .with_film_distance(settings.effective_film_distance())
        .with_pixel_step(settings.pixel_step)
        .with_move_step(settings.move_step)
    }

    pub fn with_film_distance(mut self, film_distance: f32) -> Self {
        self.film_distance = film_distance;
        self
    }

    pub fn with_pixel_step(mut self, pixel_step: f32) -> Self {
        self.pixel_step = pixel_step;
        self
    }

    pub fn with_move_step(mut self, move_step: f32) -> Self {
        self.move_step = move_step;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn film_distance(&self) -> f32 {
        self.film_distance
    }

    pub fn pixel_step(&self) -> f32 {
        self.pixel_step
    }

    /// Distance of a single camera move.
    pub fn move_step(&self) -> f32 {
        self.move_step
    }

    /// Generate the ray through the corner of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        self.ray_through(x, y, 0.0, 0.0)
    }

    /// Generate a ray through a uniformly random point of pixel (x, y).
    pub fn get_jittered_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let ox = gen_f32(rng) * self.pixel_step;
        let oy = gen_f32(rng) * self.pixel_step;
        self.ray_through(x, y, ox, oy)
    }

    /// Generate a ray through a random point of one cell of pixel (x, y).
    ///
    /// The pixel is split into `strata` x `strata` cells numbered row by row.
    /// `cell` must be below `strata * strata`.
    pub fn get_stratified_ray(
        &self,
        x: u32,
        y: u32,
        cell: u32,
        strata: u32,
        rng: &mut dyn RngCore,
    ) -> Ray {
        assert!(
            strata > 0 && (cell as u64) < strata as u64 * strata as u64,
            "cell {} out of range for {} strata",
            cell,
            strata
        );
        let cell_size = self.pixel_step / strata as f32;
        let cx = (cell % strata) as f32;
        let cy = (cell / strata) as f32;
        let ox = (cx + gen_f32(rng)) * cell_size;
        let oy = (cy + gen_f32(rng)) * cell_size;
        self.ray_through(x, y, ox, oy)
    }

    /// Generate the ray of pixel (x, y) with offset rays for its right and lower neighbors.
    pub fn get_ray_differential(&self, x: u32, y: u32) -> RayDifferential {
        let ray = self.get_ray(x, y);
        let mut rd = RayDifferential::new(ray);
        rd.rx_direction = ray.d + self.right * self.pixel_step;
        rd.ry_direction = ray.d - self.up * self.pixel_step;
        rd.has_differentials = true;
        rd
    }

    /// Film point offset by (ox, oy) world units from the corner of pixel (x, y).
    fn ray_through(&self, x: u32, y: u32, ox: f32, oy: f32) -> Ray {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} film",
            x,
            y,
            self.width,
            self.height
        );

        let film_center = self.position + self.direction * self.film_distance;
        let dx = (x as f32 - self.width as f32 / 2.0) * self.pixel_step + ox;
        let dy = (y as f32 - self.height as f32 / 2.0) * self.pixel_step + oy;
        // Film y grows downwards
        let film_point = film_center + self.right * dx - self.up * dy;

        Ray::new(self.position, film_point - self.position, CAMERA_RAY_EPSILON)
    }

    pub fn move_left(&mut self, d: f32) {
        self.position += DOWN.cross(self.direction) * d;
    }

    pub fn move_right(&mut self, d: f32) {
        self.position += self.direction.cross(DOWN) * d;
    }

    pub fn move_forward(&mut self, d: f32) {
        self.position += self.direction * d;
    }

    pub fn move_backward(&mut self, d: f32) {
        self.position -= self.direction * d;
    }

    /// Move the camera by `d` world units.
    ///
    /// Any accumulated samples are stale afterwards.
    pub fn apply(&mut self, movement: Movement, d: f32) {
        match movement {
            Movement::Left => self.move_left(d),
            Movement::Right => self.move_right(d),
            Movement::Forward => self.move_forward(d),
            Movement::Backward => self.move_backward(d),
        }
    }
}
