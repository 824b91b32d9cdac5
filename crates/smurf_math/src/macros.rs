// Operator boilerplate shared by the x/y/z types.
//
// Only the operations that make sense for every implementor live here. Ops that mix
// types (point - point = vector etc.) are written out next to the type they belong to.

/// `Index`/`IndexMut` over the three components.
macro_rules! impl_component_index {
    ($t:ident) => {
        impl std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    0 => &self.x,
                    1 => &self.y,
                    2 => &self.z,
                    _ => panic!("{} index out of range: {}", stringify!($t), i),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    2 => &mut self.z,
                    _ => panic!("{} index out of range: {}", stringify!($t), i),
                }
            }
        }
    };
}

/// Scaling by `f32` from either side and division by `f32`.
///
/// Division by zero is a caller bug and only checked in debug builds.
macro_rules! impl_scalar_ops {
    ($t:ident) => {
        impl std::ops::Mul<f32> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, f: f32) -> $t {
                $t::new(self.x * f, self.y * f, self.z * f)
            }
        }

        impl std::ops::Mul<$t> for f32 {
            type Output = $t;

            #[inline]
            fn mul(self, v: $t) -> $t {
                v * self
            }
        }

        impl std::ops::MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, f: f32) {
                *self = *self * f;
            }
        }

        impl std::ops::Div<f32> for $t {
            type Output = $t;

            #[inline]
            fn div(self, f: f32) -> $t {
                debug_assert!(f != 0.0, "{} divided by zero", stringify!($t));
                let inv = 1.0 / f;
                $t::new(self.x * inv, self.y * inv, self.z * inv)
            }
        }

        impl std::ops::DivAssign<f32> for $t {
            #[inline]
            fn div_assign(&mut self, f: f32) {
                *self = *self / f;
            }
        }
    };
}

/// Component-wise `+`, `-` and negation between two values of the same type.
macro_rules! impl_same_type_ops {
    ($t:ident) => {
        impl std::ops::Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, other: $t) -> $t {
                $t::new(self.x + other.x, self.y + other.y, self.z + other.z)
            }
        }

        impl std::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, other: $t) {
                *self = *self + other;
            }
        }

        impl std::ops::Sub for $t {
            type Output = $t;

            #[inline]
            fn sub(self, other: $t) -> $t {
                $t::new(self.x - other.x, self.y - other.y, self.z - other.z)
            }
        }

        impl std::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, other: $t) {
                *self = *self - other;
            }
        }

        impl std::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::new(-self.x, -self.y, -self.z)
            }
        }
    };
}

/// Lossless conversions to and from `glam::Vec3`.
macro_rules! impl_glam_conversions {
    ($t:ident) => {
        impl From<glam::Vec3> for $t {
            #[inline]
            fn from(v: glam::Vec3) -> Self {
                $t::new(v.x, v.y, v.z)
            }
        }

        impl From<$t> for glam::Vec3 {
            #[inline]
            fn from(v: $t) -> Self {
                glam::Vec3::new(v.x, v.y, v.z)
            }
        }

        impl From<[f32; 3]> for $t {
            #[inline]
            fn from(a: [f32; 3]) -> Self {
                $t::new(a[0], a[1], a[2])
            }
        }
    };
}
