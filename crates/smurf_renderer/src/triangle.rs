//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane, then keeps the hit if it lies on the inner side
//! of all three edges.

use smurf_math::{Bounds3, Normal3, Point3, Ray};

use crate::shape::{Shape, Surface};

/// A flat shaded triangle.
///
/// The winding of `p1`, `p2`, `p3` picks the facing of the normal
/// `normalize((p3 - p1) x (p2 - p1))`.
pub struct Triangle {
    p1: Point3,
    p2: Point3,
    p3: Point3,
    /// Pre-computed face normal (unit length)
    normal: Normal3,
    surface: Surface,
    bbox: Bounds3,
}

impl Triangle {
    /// Create a new triangle from three vertices. The vertices must not be collinear.
    pub fn new(p1: Point3, p2: Point3, p3: Point3, surface: Surface) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = Normal3::from(e2.cross(e1).normalized());

        // Pad thin dimensions to avoid degenerate bounds
        let bbox = Bounds3::new(p1, p2).union_point(p3).expand(1e-4);

        Self {
            p1,
            p2,
            p3,
            normal,
            surface,
            bbox,
        }
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Which side of the edge `a -> b` the point `p` lies on, relative to the normal.
    #[inline]
    fn edge_side(&self, p: Point3, a: Point3, b: Point3) -> f32 {
        self.normal.dot_v((p - a).cross(b - a))
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot_v(ray.d);
        if denom == 0.0 {
            // Parallel to the plane
            return None;
        }

        let t = self.normal.dot_v(self.p1 - ray.o) / denom;
        if !ray.contains(t) {
            return None;
        }

        let p = ray.at(t);
        if self.edge_side(p, self.p1, self.p2) < 0.0
            || self.edge_side(p, self.p2, self.p3) < 0.0
            || self.edge_side(p, self.p3, self.p1) < 0.0
        {
            return None;
        }

        Some(t)
    }

    fn normal_at(&self, _p: Point3) -> Normal3 {
        self.normal
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn bounds(&self) -> Bounds3 {
        self.bbox
    }
}
