use crate::{Point3, Vector3};

/// A ray segment in 3D space.
///
/// Rays are used for raytracing - they represent a line starting at `o` and
/// traveling along `d`. Only the parametric range `[mint, maxt]` counts as hits.
/// `time` is carried for motion blur and `depth` counts the bounces of a light path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Origin of the ray
    pub o: Point3,
    /// Direction of the ray, not necessarily normalized
    pub d: Vector3,
    pub mint: f32,
    pub maxt: f32,
    pub time: f32,
    pub depth: u32,
}

impl Ray {
    /// Create a new ray that is valid from `mint` to infinity.
    #[inline]
    pub fn new(o: Point3, d: Vector3, mint: f32) -> Self {
        Self::with_segment(o, d, mint, f32::INFINITY)
    }

    /// Create a new ray that is valid for `t` in `[mint, maxt]`.
    #[inline]
    pub fn with_segment(o: Point3, d: Vector3, mint: f32, maxt: f32) -> Self {
        Self {
            o,
            d,
            mint,
            maxt,
            time: 0.0,
            depth: 0,
        }
    }

    /// Create a ray continuing the path of `parent`.
    ///
    /// The time stamp is inherited and the depth is one deeper than the parent's.
    #[inline]
    pub fn spawn(o: Point3, d: Vector3, parent: &Ray, mint: f32) -> Self {
        Self {
            o,
            d,
            mint,
            maxt: f32::INFINITY,
            time: parent.time,
            depth: parent.depth + 1,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: o + t * d
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.o + self.d * t
    }

    /// Returns true if `t` is within the valid segment of the ray (inclusive).
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        self.mint <= t && t <= self.maxt
    }
}

/// A [Ray] with optional offset rays for the neighboring pixels.
///
/// Used for estimating the footprint of a camera ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayDifferential {
    pub ray: Ray,
    pub has_differentials: bool,
    pub rx_origin: Point3,
    pub ry_origin: Point3,
    pub rx_direction: Vector3,
    pub ry_direction: Vector3,
}

impl RayDifferential {
    /// Wraps `ray` without differentials.
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            has_differentials: false,
            rx_origin: ray.o,
            ry_origin: ray.o,
            rx_direction: ray.d,
            ry_direction: ray.d,
        }
    }

    /// Scales the offsets to match a sample spacing of `s` pixels.
    pub fn scale_differentials(&mut self, s: f32) {
        let o = self.ray.o;
        let d = self.ray.d;
        self.rx_origin = o + (self.rx_origin - o) * s;
        self.ry_origin = o + (self.ry_origin - o) * s;
        self.rx_direction = d + (self.rx_direction - d) * s;
        self.ry_direction = d + (self.ry_direction - d) * s;
    }
}

impl From<Ray> for RayDifferential {
    fn from(ray: Ray) -> Self {
        Self::new(ray)
    }
}
