//! Smurf Renderer - Progressive CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres and triangles with ideal diffuse and
//! ideal mirror surfaces. Every frame adds one sample per pixel to a [Film]; the
//! displayed image is the running average.

mod camera;
mod context;
mod error;
mod film;
mod frame;
mod renderer;
mod sampling;
mod scene;
mod shape;
mod sphere;
mod triangle;

pub use camera::{Camera, Movement, CAMERA_RAY_EPSILON};
pub use context::RenderContext;
pub use error::{RenderError, RenderResult};
pub use film::{DisplayBuffer, Film};
pub use frame::{render_frame, row_seed};
pub use renderer::{
    clamp_01, color_to_rgb, render_pixel, trace_ray, RenderConfig, DIFFUSE_RAY_EPSILON,
    MIRROR_RAY_EPSILON,
};
pub use sampling::{
    concentric_sample_disk, cosine_hemisphere_pdf, cosine_sample_hemisphere, gen_f32,
    sample_hemisphere, uniform_hemisphere_pdf, uniform_sample_hemisphere,
};
pub use scene::{Scene, SceneHit, ShapeId};
pub use shape::{face_normal, Color, MaterialKind, Shape, Surface};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export settings types used by the render configuration
pub use smurf_core::{HemisphereSampling, PixelSampling};
/// Re-export geometry types from smurf_math
pub use smurf_math::{Normal3, Point3, Ray, Vec3, Vector3};
