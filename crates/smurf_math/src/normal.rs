use crate::Vector3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A three-dimensional surface normal.
///
/// Note that a `Normal3` is not necessarily normalized as it is merely a vector perpendicular
/// to a surface at a position on it. It is kept apart from [Vector3] since the two
/// transform differently under non-uniform scaling.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Normal3 {
    /// The x component of the normal.
    pub x: f32,
    /// The y component of the normal.
    pub y: f32,
    /// The z component of the normal.
    pub z: f32,
}

impl_component_index!(Normal3);
impl_scalar_ops!(Normal3);
impl_same_type_ops!(Normal3);
impl_glam_conversions!(Normal3);

impl Normal3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let n = Self { x, y, z };
        debug_assert!(!n.has_nans(), "Normal3 with NaN components");
        n
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Normal3 {
        let len = self.length();
        debug_assert!(len > 0.0, "normalizing a zero-length Normal3");
        *self / len
    }

    #[inline]
    pub fn dot(&self, other: Normal3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the dot product of this `Normal3` and a [Vector3].
    #[inline]
    pub fn dot_v(&self, v: Vector3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    #[inline]
    pub fn abs_dot_v(&self, v: Vector3) -> f32 {
        self.dot_v(v).abs()
    }

    /// Returns this `Normal3` flipped into the hemisphere of `v`.
    #[inline]
    pub fn face_forward(&self, v: Vector3) -> Normal3 {
        if self.dot_v(v) < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Returns this `Normal3` flipped into the hemisphere of another normal.
    #[inline]
    pub fn face_forward_n(&self, n: Normal3) -> Normal3 {
        if self.dot(n) < 0.0 {
            -*self
        } else {
            *self
        }
    }
}

impl From<Vector3> for Normal3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_arithmetic() {
        let a = Normal3::new(1.0, 2.0, 3.0);
        let b = Normal3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Normal3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Normal3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Normal3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Normal3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Normal3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_normalized() {
        let n = Normal3::new(0.0, 3.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_dots() {
        let n = Normal3::new(0.0, 1.0, 0.0);
        assert_eq!(n.dot(Normal3::new(0.0, -2.0, 0.0)), -2.0);
        assert_eq!(n.dot_v(Vector3::new(3.0, 4.0, 5.0)), 4.0);
        assert_eq!(n.abs_dot_v(Vector3::new(3.0, -4.0, 5.0)), 4.0);
    }

    #[test]
    fn test_face_forward() {
        let n = Normal3::new(0.0, 0.0, 1.0);
        assert_eq!(n.face_forward(Vector3::new(0.0, 0.0, -1.0)), -n);
        assert_eq!(n.face_forward(Vector3::new(0.0, 1.0, 0.5)), n);
        assert_eq!(n.face_forward_n(Normal3::new(0.0, 0.0, -1.0)), -n);
    }

    #[test]
    fn test_explicit_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let n = Normal3::from(v);
        assert_eq!(n, Normal3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(n), v);
    }
}
