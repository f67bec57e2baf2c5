//! Wearable UI Testing Utilities
//!
//! Headless testing API for wearable display UIs: draw onto a [`TestDisplay`]
//! exactly as onto the real panel, then assert on pixels and regions.
//!
//! # Quick start
//!
//! ```
//! use wear_testing::TestDisplay;
//! use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestDisplay::new(100, 100);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! t.assert_pixel(20, 15, Rgb565::WHITE).unwrap();
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub use wear_emulator::{Emulator, EmulatorConfig};

/// Headless display for UI testing.
///
/// Wraps [`Emulator`] and adds pixel and region assertions. Derefs to
/// [`Emulator`], which implements [`DrawTarget`], so embedded-graphics
/// primitives draw directly onto it.
pub struct TestDisplay {
    inner: Emulator,
}

impl TestDisplay {
    /// Create an unmasked display with exact pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Emulator::headless(width, height),
        }
    }

    /// Create a display for a specific panel configuration.
    pub fn with_config(config: EmulatorConfig) -> Self {
        Self {
            inner: Emulator::new(config),
        }
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Return the color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb565> {
        self.inner.framebuffer().get_pixel(x, y)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected color.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb565) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual != expected {
            Err(format!(
                "assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"
            ))
        } else {
            Ok(())
        }
    }

    /// Assert that every pixel inside `rect` has the given color.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Rgb565) -> Result<(), String> {
        let tl = rect.top_left;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                self.assert_pixel(x, y, color)
                    .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given color.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Rgb565) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no pixel with color {color:?} found in {rect:?}"
            ))
        }
    }

    /// Count how many pixels in `rect` match `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb565) -> usize {
        let tl = rect.top_left;
        let mut count = 0;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                if self.pixel_at(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count pixels in `rect` that differ from `background`.
    pub fn painted_pixel_count(&self, rect: Rectangle, background: Rgb565) -> usize {
        let tl = rect.top_left;
        let mut count = 0;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                match self.pixel_at(x, y) {
                    Some(px) if px != background => count += 1,
                    _ => {}
                }
            }
        }
        count
    }

    /// The full display area as a [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        self.inner.bounding_box()
    }

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.screenshot(path)
    }

    // ── Emulator access ──────────────────────────────────────────────────────

    /// Borrow the wrapped emulator.
    pub fn emulator(&self) -> &Emulator {
        &self.inner
    }

    /// Mutably borrow the wrapped emulator.
    pub fn emulator_mut(&mut self) -> &mut Emulator {
        &mut self.inner
    }
}

impl std::ops::Deref for TestDisplay {
    type Target = Emulator;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestDisplay {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
