use crate::{Normal3, Point3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A free direction in 3D space.
///
/// Unlike a [Point3] a `Vector3` has no location, so the two only convert
/// into each other explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl_component_index!(Vector3);
impl_scalar_ops!(Vector3);
impl_same_type_ops!(Vector3);
impl_glam_conversions!(Vector3);

impl Vector3 {
    pub const X: Vector3 = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 1.0 };

    /// Creates a new `Vector3`. The components must not be NaN.
    ///
    /// Infinite components are allowed, the diagonal of an empty [Bounds3](crate::Bounds3)
    /// has them.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans(), "Vector3 with NaN components");
        v
    }

    /// Creates a `Vector3` with all components zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Returns `true` if any of the components is NaN.
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

    /// Calculates the dot product of this `Vector3` and another `Vector3`.
    #[inline]
    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn abs_dot(&self, other: Vector3) -> f32 {
        self.dot(other).abs()
    }

    /// Calculates the dot product of this `Vector3` and a [Normal3].
    #[inline]
    pub fn dot_n(&self, n: Normal3) -> f32 {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    #[inline]
    pub fn abs_dot_n(&self, n: Normal3) -> f32 {
        self.dot_n(n).abs()
    }

    /// Calculates the right-handed cross product of this `Vector3` and `other`.
    //
    // Products are done in f64 to avoid catastrophic cancellation.
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Vector3) -> Vector3 {
        let (v1x, v1y, v1z) = (self.x as f64, self.y as f64, self.z as f64);
        let (v2x, v2y, v2z) = (other.x as f64, other.y as f64, other.z as f64);
        Vector3::new(
            ((v1y * v2z) - (v1z * v2y)) as f32,
            ((v1z * v2x) - (v1x * v2z)) as f32,
            ((v1x * v2y) - (v1y * v2x)) as f32,
        )
    }

    /// Returns this `Vector3` scaled to unit length.
    ///
    /// Normalizing a zero-length vector is a caller bug.
    #[inline]
    pub fn normalized(&self) -> Vector3 {
        let len = self.length();
        debug_assert!(len > 0.0, "normalizing a zero-length Vector3");
        *self / len
    }

    /// Returns this `Vector3` flipped into the hemisphere of `reference`.
    #[inline]
    pub fn face_forward(&self, reference: Vector3) -> Vector3 {
        if self.dot(reference) < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Returns this `Vector3` flipped into the hemisphere of the normal `n`.
    #[inline]
    pub fn face_forward_n(&self, n: Normal3) -> Vector3 {
        if self.dot_n(n) < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Linearly interpolates between `a` and `b`.
    #[inline]
    pub fn lerp(t: f32, a: Vector3, b: Vector3) -> Vector3 {
        a + (b - a) * t
    }

    /// Finds the value of the maximum component.
    #[inline]
    pub fn max_comp(&self) -> f32 {
        self.x.max(self.y.max(self.z))
    }
}

impl From<Normal3> for Vector3 {
    fn from(n: Normal3) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl From<Point3> for Vector3 {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// Builds two vectors that form an orthonormal basis together with `v1`.
///
/// `v1` has to be of unit length. The second vector is picked perpendicular to the
/// larger of the x/y components to keep the cross product well conditioned.
pub fn coordinate_system(v1: Vector3) -> (Vector3, Vector3) {
    debug_assert!(
        (v1.length() - 1.0).abs() < 1e-3,
        "coordinate_system expects a unit vector, got length {}",
        v1.length()
    );

    let v2 = if v1.x.abs() > v1.y.abs() {
        let inv_len = 1.0 / (v1.x * v1.x + v1.z * v1.z).sqrt();
        Vector3::new(-v1.z * inv_len, 0.0, v1.x * inv_len)
    } else {
        let inv_len = 1.0 / (v1.y * v1.y + v1.z * v1.z).sqrt();
        Vector3::new(0.0, v1.z * inv_len, -v1.y * inv_len)
    };
    let v3 = v1.cross(v2);
    (v2, v3)
}

/// Mirrors `d` about the normal `n`: `d - 2(n·d)n`.
#[inline]
pub fn reflect(n: Normal3, d: Vector3) -> Vector3 {
    d - Vector3::from(n) * (2.0 * n.dot_v(d))
}
