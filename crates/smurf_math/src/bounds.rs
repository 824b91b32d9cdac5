use std::ops::{Index, IndexMut};

use crate::{lerp, Point3, Ray, Vector3};

/// Axis-aligned bounding box given by its two opposite corners.
///
/// Not needed by the linear scene scan but kept up to date by the shapes so an
/// acceleration structure can be built on top of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds3 {
    pub p_min: Point3,
    pub p_max: Point3,
}

impl Bounds3 {
    /// An empty box (contains nothing). Union with anything yields the other operand.
    pub const EMPTY: Bounds3 = Bounds3 {
        p_min: Point3 {
            x: f32::INFINITY,
            y: f32::INFINITY,
            z: f32::INFINITY,
        },
        p_max: Point3 {
            x: f32::NEG_INFINITY,
            y: f32::NEG_INFINITY,
            z: f32::NEG_INFINITY,
        },
    };

    #[inline]
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Create a box from two corner points in any order.
    pub fn new(p1: Point3, p2: Point3) -> Self {
        Self {
            p_min: p1.min(p2),
            p_max: p1.max(p2),
        }
    }

    /// Create a degenerate box containing only `p`.
    pub fn from_point(p: Point3) -> Self {
        Self { p_min: p, p_max: p }
    }

    /// Returns a box enclosing both this box and `p`.
    pub fn union_point(&self, p: Point3) -> Bounds3 {
        Bounds3 {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns a box enclosing both boxes.
    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns true if the boxes share any volume (touching counts).
    pub fn overlaps(&self, other: &Bounds3) -> bool {
        (0..3).all(|i| self.p_max[i] >= other.p_min[i] && self.p_min[i] <= other.p_max[i])
    }

    /// Returns true if `p` is inside the box (inclusive).
    pub fn inside(&self, p: Point3) -> bool {
        (0..3).all(|i| self.p_min[i] <= p[i] && p[i] <= self.p_max[i])
    }

    /// Returns the vector from the min corner to the max corner.
    pub fn diagonal(&self) -> Vector3 {
        self.p_max - self.p_min
    }

    /// Returns the area of the 6 sides of the box.
    pub fn surface_area(&self) -> f32 {
        let d = self.diagonal();
        2.0 * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    pub fn volume(&self) -> f32 {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Returns the point at the given per-axis interpolation factors.
    pub fn lerp(&self, tx: f32, ty: f32, tz: f32) -> Point3 {
        Point3::new(
            lerp(tx, self.p_min.x, self.p_max.x),
            lerp(ty, self.p_min.y, self.p_max.y),
            lerp(tz, self.p_min.z, self.p_max.z),
        )
    }

    /// Returns the position of `p` relative to the corners.
    ///
    /// (0, 0, 0) is `p_min` and (1, 1, 1) is `p_max`.
    pub fn offset(&self, p: Point3) -> Vector3 {
        let mut o = p - self.p_min;
        for i in 0..3 {
            if self.p_max[i] > self.p_min[i] {
                o[i] /= self.p_max[i] - self.p_min[i];
            }
        }
        o
    }

    /// Returns true if the box has a negative extent on any axis.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.p_min[i] > self.p_max[i])
    }

    /// Returns the center and radius of a sphere enclosing the box.
    ///
    /// An empty box gives a zero radius sphere at the origin.
    pub fn bounding_sphere(&self) -> (Point3, f32) {
        if self.is_empty() {
            return (Point3::origin(), 0.0);
        }
        let center = (self.p_min + self.p_max) / 2.0;
        (center, center.distance(self.p_max))
    }

    /// Pads the box by `delta` on every side.
    pub fn expand(&self, delta: f32) -> Bounds3 {
        let pad = Vector3::new(delta, delta, delta);
        Bounds3 {
            p_min: self.p_min - pad,
            p_max: self.p_max + pad,
        }
    }

    /// Test if a ray hits the box within its valid segment.
    ///
    /// Uses the slab method. Returns the entry and exit parameters.
    pub fn intersect_p(&self, ray: &Ray) -> Option<(f32, f32)> {
        let mut t0 = ray.mint;
        let mut t1 = ray.maxt;
        for i in 0..3 {
            let inv_d = 1.0 / ray.d[i];
            let mut t_near = (self.p_min[i] - ray.o[i]) * inv_d;
            let mut t_far = (self.p_max[i] - ray.o[i]) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t0 = if t_near > t0 { t_near } else { t0 };
            t1 = if t_far < t1 { t_far } else { t1 };
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<usize> for Bounds3 {
    type Output = Point3;

    fn index(&self, i: usize) -> &Point3 {
        match i {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Bounds3 corner index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Bounds3 {
    fn index_mut(&mut self, i: usize) -> &mut Point3 {
        match i {
            0 => &mut self.p_min,
            1 => &mut self.p_max,
            _ => panic!("Bounds3 corner index out of range: {}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds3 {
        Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_bounds_from_points() {
        let b = Bounds3::new(Point3::new(10.0, 0.0, 5.0), Point3::new(0.0, 10.0, -5.0));

        assert_eq!(b.p_min, Point3::new(0.0, 0.0, -5.0));
        assert_eq!(b.p_max, Point3::new(10.0, 10.0, 5.0));
        assert_eq!(b[0], b.p_min);
        assert_eq!(b[1], b.p_max);
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds3::new(Point3::origin(), Point3::new(5.0, 5.0, 5.0));
        let b = Bounds3::new(Point3::new(3.0, 3.0, 3.0), Point3::new(10.0, 10.0, 10.0));
        let u = a.union(&b);

        assert_eq!(u.p_min, Point3::origin());
        assert_eq!(u.p_max, Point3::new(10.0, 10.0, 10.0));

        let p = a.union_point(Point3::new(-1.0, 2.0, 7.0));
        assert_eq!(p.p_min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(p.p_max, Point3::new(5.0, 5.0, 7.0));
    }

    #[test]
    fn test_empty_union() {
        let b = unit_box();
        assert_eq!(Bounds3::EMPTY.union(&b), b);
        assert_eq!(
            Bounds3::EMPTY.union_point(Point3::new(1.0, 2.0, 3.0)),
            Bounds3::from_point(Point3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_bounds_overlaps() {
        let a = unit_box();
        let b = Bounds3::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 2.0, 2.0));
        let c = Bounds3::new(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
        // Apart only along z
        let d = Bounds3::new(Point3::new(0.0, 0.0, 2.0), Point3::new(1.0, 1.0, 3.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
        assert!(!d.overlaps(&a));
    }

    #[test]
    fn test_bounds_inside() {
        let b = unit_box();
        assert!(b.inside(Point3::new(0.5, 0.5, 0.5)));
        assert!(b.inside(Point3::new(1.0, 0.0, 1.0)));
        assert!(!b.inside(Point3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_area_and_volume() {
        let b = Bounds3::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(b.surface_area(), 22.0);
        assert_eq!(b.volume(), 6.0);
    }

    #[test]
    fn test_maximum_extent() {
        let x = Bounds3::new(Point3::origin(), Point3::new(10.0, 1.0, 1.0));
        let y = Bounds3::new(Point3::origin(), Point3::new(1.0, 10.0, 1.0));
        let z = Bounds3::new(Point3::origin(), Point3::new(1.0, 1.0, 10.0));

        assert_eq!(x.maximum_extent(), 0);
        assert_eq!(y.maximum_extent(), 1);
        assert_eq!(z.maximum_extent(), 2);
    }

    #[test]
    fn test_lerp_and_offset() {
        let b = Bounds3::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 4.0, 4.0));
        let p = b.lerp(0.5, 0.25, 1.0);
        assert_eq!(p, Point3::new(0.0, 1.0, 4.0));
        assert_eq!(b.offset(p), Vector3::new(0.5, 0.25, 1.0));
        assert_eq!(b.offset(b.p_min), Vector3::zeros());
    }

    #[test]
    fn test_bounding_sphere() {
        let b = Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let (center, radius) = b.bounding_sphere();
        assert_eq!(center, Point3::origin());
        assert!((radius - 3.0f32.sqrt()).abs() < 1e-6);

        assert!(Bounds3::EMPTY.is_empty());
        let (_, empty_radius) = Bounds3::EMPTY.bounding_sphere();
        assert_eq!(empty_radius, 0.0);
    }

    #[test]
    fn test_expand() {
        let b = unit_box().expand(0.5);
        assert_eq!(b.p_min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(b.p_max, Point3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn test_intersect_p() {
        let b = Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));

        // Ray pointing at center
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::Z, 0.0);
        let (t0, t1) = b.intersect_p(&ray).unwrap();
        assert!((t0 - 4.0).abs() < 1e-5);
        assert!((t1 - 6.0).abs() < 1e-5);

        // Ray pointing away
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), -Vector3::Z, 0.0);
        assert!(b.intersect_p(&ray).is_none());

        // Ray missing the box
        let ray = Ray::new(Point3::new(10.0, 0.0, 0.0), Vector3::Z, 0.0);
        assert!(b.intersect_p(&ray).is_none());
    }
}
