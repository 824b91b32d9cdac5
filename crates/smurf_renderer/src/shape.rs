//! Shape trait and surface properties.

use smurf_math::{Bounds3, Normal3, Point3, Ray, Vec3};

pub use smurf_core::MaterialKind;

/// Color type alias (linear RGB radiance or reflectance)
pub type Color = Vec3;

/// How a shape interacts with light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Fraction of light reflected per channel
    pub reflectance: Color,
    /// Emitted radiance, zero for non-emitters
    pub emittance: Color,
    pub material: MaterialKind,
}

impl Surface {
    pub fn diffuse(reflectance: Color) -> Self {
        Self {
            reflectance,
            emittance: Color::ZERO,
            material: MaterialKind::Diffuse,
        }
    }

    pub fn mirror() -> Self {
        Self {
            reflectance: Color::ONE,
            emittance: Color::ZERO,
            material: MaterialKind::Mirror,
        }
    }

    pub fn with_emittance(mut self, emittance: Color) -> Self {
        self.emittance = emittance;
        self
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Shape: Send + Sync {
    /// Returns the nearest `t` within `[ray.mint, ray.maxt]` where the ray hits the shape.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Returns the unit geometric normal at `p`.
    ///
    /// Only meaningful for points on the surface.
    fn normal_at(&self, p: Point3) -> Normal3;

    fn surface(&self) -> &Surface;

    /// Get the axis-aligned bounding box of this shape.
    fn bounds(&self) -> Bounds3;
}

/// Flips `normal` so it points against the ray.
///
/// Shading always happens on the side the ray arrives from, so surfaces are two-sided.
#[inline]
pub fn face_normal(ray: &Ray, normal: Normal3) -> Normal3 {
    if normal.dot_v(ray.d) > 0.0 {
        -normal
    } else {
        normal
    }
}
