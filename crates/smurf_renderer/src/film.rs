//! Progressive accumulation film and its 8-bit display image.

use std::path::Path;

use image::ImageFormat;
use rayon::prelude::*;
use rayon::slice::ChunksMut;

use crate::error::{RenderError, RenderResult};
use crate::renderer::color_to_rgb;
use crate::Color;

/// Running per-pixel radiance sums shared by all frames since the last reset.
///
/// The displayed pixel is `sum / iteration`. A frame adds exactly one sample to every
/// pixel and then calls [Film::finish_frame].
pub struct Film {
    width: u32,
    height: u32,
    sums: Vec<Color>,
    frames: u32,
}

impl Film {
    /// Create a new film filled with black.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFilm { width, height });
        }
        Ok(Self {
            width,
            height,
            sums: vec![Color::ZERO; width as usize * height as usize],
            frames: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Add one sample to the pixel at (x, y).
    pub fn add_sample(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.sums[i] += color;
    }

    /// Mark the end of a full frame.
    pub fn finish_frame(&mut self) {
        self.frames += 1;
    }

    /// Number of full frames accumulated since the last reset.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// The divisor of the displayed image. Starts at 1 and counts full frames.
    pub fn iteration(&self) -> u32 {
        self.frames.max(1)
    }

    /// Get the accumulated sum at (x, y).
    pub fn sum(&self, x: u32, y: u32) -> Color {
        self.sums[self.index(x, y)]
    }

    /// Get the averaged color at (x, y), unclamped.
    pub fn display_color(&self, x: u32, y: u32) -> Color {
        self.sum(x, y) / self.iteration() as f32
    }

    /// Clear all sums and restart the iteration count.
    pub fn reset(&mut self) {
        self.sums.fill(Color::ZERO);
        self.frames = 0;
    }

    /// Disjoint rows of sums, top row first, for a parallel sweep.
    pub fn rows_mut(&mut self) -> ChunksMut<'_, Color> {
        self.sums.par_chunks_mut(self.width as usize)
    }

    /// Averaged and clamped 8-bit image of the current state.
    pub fn display_buffer(&self) -> DisplayBuffer {
        let scale = 1.0 / self.iteration() as f32;
        let pixels = self.sums.iter().map(|s| color_to_rgb(*s * scale)).collect();
        DisplayBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Grid of 8-bit RGB pixels, row-major from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl DisplayBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Packed RGB bytes (for display or saving).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }

    /// Check that `path` names an image format [DisplayBuffer::save] can write.
    ///
    /// Lets a long render fail before it starts instead of at the final save.
    pub fn check_output_path<P: AsRef<Path>>(path: P) -> RenderResult<()> {
        match ImageFormat::from_path(path)? {
            ImageFormat::Png => Ok(()),
            format => Err(RenderError::UnsupportedOutput { format }),
        }
    }

    /// Save the image, the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        self.to_image().save(path.as_ref())?;
        log::debug!("Saved {}x{} image to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(film: &mut Film, color: Color) {
        for y in 0..film.height() {
            for x in 0..film.width() {
                film.add_sample(x, y, color);
            }
        }
    }

    #[test]
    fn test_empty_film_is_error() {
        assert!(matches!(
            Film::new(0, 10),
            Err(RenderError::EmptyFilm { width: 0, height: 10 })
        ));
        assert!(Film::new(10, 0).is_err());
    }

    #[test]
    fn test_new_film_is_black() {
        let film = Film::new(4, 3).unwrap();
        assert_eq!(film.iteration(), 1);
        assert_eq!(film.frames(), 0);
        assert_eq!(film.display_color(3, 2), Color::ZERO);
    }

    #[test]
    fn test_single_frame_round_trip() {
        let mut film = Film::new(4, 3).unwrap();
        let c = Color::new(0.25, 2.0, 0.5);
        film.reset();
        fill(&mut film, c);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(film.display_color(x, y), c);
            }
        }

        film.finish_frame();
        assert_eq!(film.iteration(), 1);
        assert_eq!(film.display_color(1, 1), c);
    }

    #[test]
    fn test_constant_frames_average() {
        let mut film = Film::new(5, 2).unwrap();
        let c = Color::new(0.3, 0.6, 0.9);

        for _ in 0..10 {
            fill(&mut film, c);
            film.finish_frame();
        }

        assert_eq!(film.iteration(), 10);
        assert!((film.sum(2, 1) - c * 10.0).length() < 1e-5);
        for y in 0..2 {
            for x in 0..5 {
                assert!((film.display_color(x, y) - c).length() < 1e-5);
            }
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut film = Film::new(3, 3).unwrap();
        fill(&mut film, Color::ONE);
        film.finish_frame();
        film.finish_frame();

        film.reset();
        assert_eq!(film.iteration(), 1);
        assert_eq!(film.frames(), 0);
        assert_eq!(film.sum(2, 2), Color::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_add_sample_out_of_range() {
        let mut film = Film::new(3, 3).unwrap();
        film.add_sample(3, 0, Color::ONE);
    }

    #[test]
    fn test_rows_are_disjoint() {
        let mut film = Film::new(4, 3).unwrap();
        film.rows_mut().enumerate().for_each(|(y, row)| {
            assert_eq!(row.len(), 4);
            for px in row.iter_mut() {
                *px += Color::splat(y as f32);
            }
        });

        assert_eq!(film.sum(0, 0), Color::ZERO);
        assert_eq!(film.sum(3, 2), Color::splat(2.0));
    }

    #[test]
    fn test_display_buffer_clamps() {
        let mut film = Film::new(2, 1).unwrap();
        film.add_sample(0, 0, Color::new(4.0, 1.0, 0.0));
        film.add_sample(1, 0, Color::new(1.0, 0.5, 0.25));
        film.finish_frame();
        film.add_sample(0, 0, Color::new(0.0, 1.0, 0.0));
        film.add_sample(1, 0, Color::new(1.0, 0.5, 0.25));
        film.finish_frame();

        let buf = film.display_buffer();
        assert_eq!(buf.get(0, 0), [255, 255, 0]);
        assert_eq!(buf.get(1, 0), [255, 127, 63]);
        assert_eq!(buf.as_bytes(), &[255, 255, 0, 255, 127, 63]);

        let img = buf.to_image();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [255, 127, 63]);
    }

    #[test]
    fn test_check_output_path() {
        assert!(DisplayBuffer::check_output_path("out/render.png").is_ok());
        assert!(matches!(
            DisplayBuffer::check_output_path("render"),
            Err(RenderError::Image(_))
        ));
        assert!(matches!(
            DisplayBuffer::check_output_path("render.jpg"),
            Err(RenderError::UnsupportedOutput { format: ImageFormat::Jpeg })
        ));
    }
}
