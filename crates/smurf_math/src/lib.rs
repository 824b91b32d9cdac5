//! Geometry types for the path tracer.
//!
//! Points, vectors and normals are kept as distinct types so a direction can never be
//! mistaken for a position. Colors and other plain triples use [glam::Vec3].

#[macro_use]
mod macros;

mod bounds;
mod normal;
mod point;
mod ray;
mod vector;

pub use bounds::Bounds3;
pub use normal::Normal3;
pub use point::Point3;
pub use ray::{Ray, RayDifferential};
pub use vector::{coordinate_system, reflect, Vector3};

// Re-export glam for convenience
pub use glam::Vec3;

/// Linearly interpolates between two scalars.
#[inline]
pub fn lerp(t: f32, v1: f32, v2: f32) -> f32 {
    (1.0 - t) * v1 + t * v2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 2.0, 4.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 4.0), 4.0);
        assert_eq!(lerp(0.5, 2.0, 4.0), 3.0);
    }

    #[test]
    fn test_vec3_conversion() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let p = Point3::from(v);
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(p), v);
    }
}
