use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Vector3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about Point ops:
// Some don't really make mathematical sense but are useful in weighted sums
// point + point = point
// point * scalar = point

/// A position in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3 {
    /// The x component of the point.
    pub x: f32,
    /// The y component of the point.
    pub y: f32,
    /// The z component of the point.
    pub z: f32,
}

impl_component_index!(Point3);
impl_scalar_ops!(Point3);
impl_glam_conversions!(Point3);

impl Point3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans(), "Point3 with NaN components");
        p
    }

    /// The origin of the coordinate system.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    #[inline]
    pub fn distance(&self, other: Point3) -> f32 {
        (*self - other).length()
    }

    #[inline]
    pub fn distance_squared(&self, other: Point3) -> f32 {
        (*self - other).length_squared()
    }

    /// Linearly interpolates between `a` and `b`.
    #[inline]
    pub fn lerp(t: f32, a: Point3, b: Point3) -> Point3 {
        a * (1.0 - t) + b * t
    }

    /// Returns the component-wise minimum of two points.
    #[inline]
    pub fn min(&self, other: Point3) -> Point3 {
        Point3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Returns the component-wise maximum of two points.
    #[inline]
    pub fn max(&self, other: Point3) -> Point3 {
        Point3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl From<Vector3> for Point3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, v: Vector3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl AddAssign<Vector3> for Point3 {
    #[inline]
    fn add_assign(&mut self, v: Vector3) {
        *self = *self + v;
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, v: Vector3) -> Point3 {
        Point3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl SubAssign<Vector3> for Point3 {
    #[inline]
    fn sub_assign(&mut self, v: Vector3) {
        *self = *self - v;
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, other: Point3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Point3) {
        *self = *self + other;
    }
}
