//! CPU-based RGB565 framebuffer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// CPU-based framebuffer holding one `Rgb565` value per pixel.
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    // Pixel count is bounded by panel dimensions (a few hundred px per side),
    // so width * height fits comfortably in u32 and usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    /// Framebuffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set pixel at coordinates. Out-of-bounds writes are ignored.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Get pixel at coordinates, or `None` when out of bounds.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill the entire framebuffer with `color`.
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Clear the framebuffer to black.
    pub fn clear(&mut self) {
        self.fill(Rgb565::BLACK);
    }

    /// Iterate over pixels row-major with their coordinates.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Rgb565)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i as u32) % width, (i as u32) / width, *px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_black() {
        let fb = Framebuffer::new(8, 8);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb565::BLACK));
        assert_eq!(fb.get_pixel(7, 7), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut fb = Framebuffer::new(8, 8);
        fb.set_pixel(3, 4, Rgb565::RED);
        assert_eq!(fb.get_pixel(3, 4), Some(Rgb565::RED));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut fb = Framebuffer::new(8, 8);
        fb.set_pixel(8, 0, Rgb565::RED);
        fb.set_pixel(0, 8, Rgb565::RED);
        assert_eq!(fb.get_pixel(8, 0), None);
        assert_eq!(fb.get_pixel(0, 8), None);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill(Rgb565::BLUE);
        assert_eq!(fb.get_pixel(2, 2), Some(Rgb565::BLUE));
        fb.clear();
        assert_eq!(fb.get_pixel(2, 2), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set_pixel(2, 1, Rgb565::GREEN);
        let last = fb.iter().last().unwrap();
        assert_eq!(last, (2, 1, Rgb565::GREEN));
    }
}
