//! One progressive frame: a new sample for every pixel of the film.
//!
//! Rows are rendered in parallel using rayon. Each row draws from its own random stream
//! seeded from (seed, frame, row), so a frame is identical no matter how the rows are
//! scheduled.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, Film, RenderConfig, Scene};

/// Seed of the random stream for one row of one frame.
pub fn row_seed(seed: u64, frame: u32, row: u32) -> u64 {
    // SplitMix64 finalizer over the packed inputs
    let mut z = seed
        ^ (frame as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (row as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Add one sample to every pixel of `film` and advance its iteration.
///
/// The camera and film must have the same resolution.
pub fn render_frame(scene: &Scene, camera: &Camera, film: &mut Film, config: &RenderConfig, seed: u64) {
    assert!(
        camera.width() == film.width() && camera.height() == film.height(),
        "camera is {}x{} but film is {}x{}",
        camera.width(),
        camera.height(),
        film.width(),
        film.height()
    );

    let frame = film.frames();
    film.rows_mut().enumerate().for_each(|(y, row)| {
        let y = y as u32;
        let mut rng = StdRng::seed_from_u64(row_seed(seed, frame, y));
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel += render_pixel(scene, camera, x as u32, y, frame, config, &mut rng);
        }
    });
    film.finish_frame();

    log::trace!("Finished frame {}", film.frames());
}
