//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive tracing with a hard depth cutoff (no Russian roulette)
//! - Ideal diffuse and ideal mirror surfaces
//! - Uniform or cosine weighted hemisphere sampling with matching estimators

use rand::RngCore;
use smurf_core::{HemisphereSampling, PixelSampling, RenderSettings};
use smurf_math::{reflect, Ray, Vec3};

use crate::sampling::sample_hemisphere;
use crate::shape::{face_normal, MaterialKind};
use crate::{Camera, Color, Scene};

/// Start of diffuse bounce rays
pub const DIFFUSE_RAY_EPSILON: f32 = 0.001;
/// Start of mirror bounce rays
pub const MIRROR_RAY_EPSILON: f32 = 0.00001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum ray bounce depth, deeper paths return black
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Diffuse bounce sampling strategy
    pub sampling: HemisphereSampling,
    /// Sub-pixel placement of camera rays
    pub pixel_sampling: PixelSampling,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&RenderSettings::default())
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            background: Vec3::from(settings.background),
            sampling: settings.sampling,
            pixel_sampling: settings.pixel_sampling,
        }
    }
}

/// Compute the radiance arriving along a ray.
///
/// `depth` is the number of bounces that led to `ray`, camera rays start at 0. Reflectance
/// is treated as 2π times the Lambertian BRDF, so both sampling strategies estimate the same
/// image:
/// - uniform, pdf 1/2π: `Li * (n·wi) * reflectance + emittance`
/// - cosine, pdf cosθ/π: `Li * reflectance / 2 + emittance`
pub fn trace_ray(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Past max depth, no light
    if depth > config.max_depth {
        return Color::ZERO;
    }

    let hit = match scene.intersect(ray) {
        Some(hit) => hit,
        None => return config.background,
    };

    let p = ray.at(hit.t);
    let n = face_normal(ray, hit.shape.normal_at(p));
    let surface = hit.shape.surface();

    match surface.material {
        MaterialKind::Diffuse => {
            let wi = sample_hemisphere(n, config.sampling, rng);
            let bounce = Ray::spawn(p, wi, ray, DIFFUSE_RAY_EPSILON);
            let li = trace_ray(&bounce, scene, depth + 1, config, rng);

            match config.sampling {
                HemisphereSampling::Uniform => {
                    li * n.dot_v(wi) * surface.reflectance + surface.emittance
                }
                HemisphereSampling::Cosine => li * surface.reflectance * 0.5 + surface.emittance,
            }
        }
        MaterialKind::Mirror => {
            let wr = reflect(n, ray.d);
            let bounce = Ray::spawn(p, wr, ray, MIRROR_RAY_EPSILON);
            trace_ray(&bounce, scene, depth + 1, config, rng)
        }
    }
}

/// Trace one new sample for pixel (x, y).
///
/// `frame` selects the cell for stratified pixel sampling.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    frame: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = match config.pixel_sampling {
        PixelSampling::Jittered => camera.get_jittered_ray(x, y, rng),
        PixelSampling::Stratified { strata } => {
            let cells = strata as u64 * strata as u64;
            let cell = (frame as u64 % cells) as u32;
            camera.get_stratified_ray(x, y, cell, strata, rng)
        }
    };
    trace_ray(&ray, scene, 0, config, rng)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB, clamping components above 1.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}
