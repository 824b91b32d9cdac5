//! Sphere primitive for ray tracing.

use smurf_math::{Bounds3, Normal3, Point3, Ray, Vector3};

use crate::shape::{Shape, Surface};

/// A sphere primitive.
pub struct Sphere {
    center: Point3,
    radius: f32,
    surface: Surface,
    bbox: Bounds3,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Point3, radius: f32, surface: Surface) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        let rvec = Vector3::new(radius, radius, radius);
        let bbox = Bounds3::new(center - rvec, center + rvec);

        Self {
            center,
            radius,
            surface,
            bbox,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.o - self.center;
        let a = ray.d.length_squared();
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let inv_2a = 0.5 / a;

        // Roots outside the valid segment count as no root
        let valid = |t: f32| if ray.contains(t) { t } else { f32::INFINITY };
        let t0 = valid((-b - sqrtd) * inv_2a);
        let t1 = valid((-b + sqrtd) * inv_2a);

        let t = t0.min(t1);
        if t.is_finite() {
            Some(t)
        } else {
            None
        }
    }

    fn normal_at(&self, p: Point3) -> Normal3 {
        Normal3::from(p - self.center).normalized()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn bounds(&self) -> Bounds3 {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn grey_sphere(center: Point3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Surface::diffuse(Color::splat(0.5)))
    }

    #[test]
    fn test_sphere_hit() {
        for r in [0.5, 1.0, 3.0, 20.0] {
            let sphere = grey_sphere(Point3::origin(), r);
            let ray = Ray::new(Point3::new(0.0, 0.0, -10.0 * r), Vector3::Z, 0.0);

            let t = sphere.intersect(&ray).unwrap();
            assert!((t - 9.0 * r).abs() < 1e-4 * r);

            let p = ray.at(t);
            let n = sphere.normal_at(p);
            assert!((n.length() - 1.0).abs() < 1e-5);
            let expected = Normal3::from(Vector3::from(p).normalized());
            assert!((n - expected).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = grey_sphere(Point3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Point3::origin(), Vector3::Z, 0.0);
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside the sphere
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), -Vector3::Z, 0.0);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_returns_far_root() {
        let sphere = grey_sphere(Point3::origin(), 2.0);
        let ray = Ray::new(Point3::origin(), Vector3::X, 0.001);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_respects_segment() {
        let sphere = grey_sphere(Point3::origin(), 1.0);

        // Near root at 4 is beyond maxt
        let ray = Ray::with_segment(Point3::new(0.0, 0.0, -5.0), Vector3::Z, 0.0, 3.0);
        assert!(sphere.intersect(&ray).is_none());

        // Near root before mint, far root at 6 still valid
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::Z, 5.0);
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_bounds() {
        let sphere = grey_sphere(Point3::new(1.0, 2.0, 3.0), 2.0);
        let b = sphere.bounds();
        assert_eq!(b.p_min, Point3::new(-1.0, 0.0, 1.0));
        assert_eq!(b.p_max, Point3::new(3.0, 4.0, 5.0));
    }
}
