//! Random numbers and hemisphere sampling.

use std::f32::consts::{FRAC_1_PI, FRAC_PI_2, FRAC_PI_4, PI};

use rand::{Rng, RngCore};
use smurf_core::HemisphereSampling;
use smurf_math::{coordinate_system, Normal3, Vector3};

/// Uniform random value in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Monte_Carlo_Integration/2D_Sampling_with_Multidimensional_Transformations

/// Maps a uniform square sample to a direction on the +z hemisphere with pdf 1 / 2π.
pub fn uniform_sample_hemisphere(u1: f32, u2: f32) -> Vector3 {
    let z = u1;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * u2;
    Vector3::new(r * phi.cos(), r * phi.sin(), z)
}

#[inline]
pub fn uniform_hemisphere_pdf() -> f32 {
    0.5 * FRAC_1_PI
}

/// Maps a uniform square sample to the unit disk keeping relative areas.
pub fn concentric_sample_disk(u1: f32, u2: f32) -> (f32, f32) {
    let ox = 2.0 * u1 - 1.0;
    let oy = 2.0 * u2 - 1.0;
    if ox == 0.0 && oy == 0.0 {
        return (0.0, 0.0);
    }

    let (theta, r) = if ox.abs() > oy.abs() {
        (FRAC_PI_4 * (oy / ox), ox)
    } else {
        (FRAC_PI_2 - FRAC_PI_4 * (ox / oy), oy)
    };
    (r * theta.cos(), r * theta.sin())
}

/// Maps a uniform square sample to a direction on the +z hemisphere with pdf cosθ / π.
pub fn cosine_sample_hemisphere(u1: f32, u2: f32) -> Vector3 {
    let (x, y) = concentric_sample_disk(u1, u2);
    let z = (1.0 - x * x - y * y).max(0.0).sqrt();
    Vector3::new(x, y, z)
}

#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: f32) -> f32 {
    cos_theta * FRAC_1_PI
}

/// Draws a direction on the hemisphere around `n` with the given strategy.
///
/// `n` has to be of unit length.
pub fn sample_hemisphere(n: Normal3, strategy: HemisphereSampling, rng: &mut dyn RngCore) -> Vector3 {
    let u1 = gen_f32(rng);
    let u2 = gen_f32(rng);
    let local = match strategy {
        HemisphereSampling::Uniform => uniform_sample_hemisphere(u1, u2),
        HemisphereSampling::Cosine => cosine_sample_hemisphere(u1, u2),
    };

    let nv = Vector3::from(n);
    let (t, b) = coordinate_system(nv);
    t * local.x + b * local.y + nv * local.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_uniform_hemisphere_is_unit_and_upper() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let d = uniform_sample_hemisphere(gen_f32(&mut rng), gen_f32(&mut rng));
            assert!((d.length() - 1.0).abs() < 1e-4);
            assert!(d.z >= 0.0);
        }
    }

    #[test]
    fn test_concentric_disk_inside() {
        assert_eq!(concentric_sample_disk(0.5, 0.5), (0.0, 0.0));
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let (x, y) = concentric_sample_disk(gen_f32(&mut rng), gen_f32(&mut rng));
            assert!(x * x + y * y <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_cosine_hemisphere_mean_cosine() {
        // E[cosθ] is 2/3 under the cosine pdf and 1/2 under the uniform one
        let mut rng = StdRng::seed_from_u64(3);
        let n = 20000;
        let mut cos_sum = 0.0;
        let mut uni_sum = 0.0;
        for _ in 0..n {
            let c = cosine_sample_hemisphere(gen_f32(&mut rng), gen_f32(&mut rng));
            assert!((c.length() - 1.0).abs() < 1e-4);
            cos_sum += c.z;
            uni_sum += uniform_sample_hemisphere(gen_f32(&mut rng), gen_f32(&mut rng)).z;
        }
        assert!((cos_sum / n as f32 - 2.0 / 3.0).abs() < 0.01);
        assert!((uni_sum / n as f32 - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_pdfs() {
        assert!((uniform_hemisphere_pdf() - 1.0 / (2.0 * PI)).abs() < 1e-7);
        assert!((cosine_hemisphere_pdf(1.0) - 1.0 / PI).abs() < 1e-7);
        assert_eq!(cosine_hemisphere_pdf(0.0), 0.0);
    }

    #[test]
    fn test_sample_hemisphere_around_normal() {
        let mut rng = StdRng::seed_from_u64(4);
        let normals = [
            Normal3::new(0.0, 1.0, 0.0),
            Normal3::new(0.0, -1.0, 0.0),
            Normal3::new(1.0, 1.0, -1.0).normalized(),
        ];
        for n in normals {
            for strategy in [HemisphereSampling::Uniform, HemisphereSampling::Cosine] {
                for _ in 0..200 {
                    let d = sample_hemisphere(n, strategy, &mut rng);
                    assert!((d.length() - 1.0).abs() < 1e-4);
                    assert!(n.dot_v(d) >= -1e-5);
                }
            }
        }
    }
}
