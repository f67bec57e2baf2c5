//! Wearable Display Emulator
//!
//! Headless CPU emulation of a small round wearable panel, for driving the
//! component crates on a desktop machine. Implements `DrawTarget`, so any
//! `embedded-graphics` drawing code runs against it unchanged. Round panels
//! are emulated with a circular clip mask; PNG screenshots support automated
//! inspection and demo output.
//!
//! # Example
//!
//! ```no_run
//! use wear_emulator::{Emulator, EmulatorConfig};
//! use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::{Circle, PrimitiveStyle}};
//!
//! let mut emulator = Emulator::new(EmulatorConfig::WATCH_240);
//! Circle::new(Point::new(70, 70), 100)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 4))
//!     .draw(&mut emulator)?;
//! emulator.screenshot("frame.png").unwrap();
//! # Ok::<(), core::convert::Infallible>(())
//! ```

pub mod config;
pub mod framebuffer;

pub use config::EmulatorConfig;
pub use framebuffer::Framebuffer;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Headless emulator for a small wearable panel.
pub struct Emulator {
    framebuffer: Framebuffer,
    config: EmulatorConfig,
}

impl Emulator {
    /// Create an emulator for the given panel configuration.
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            framebuffer: Framebuffer::new(config.width, config.height),
            config,
        }
    }

    /// Create an unmasked emulator with exact pixel dimensions.
    pub fn headless(width: u32, height: u32) -> Self {
        Self::new(EmulatorConfig::rect(width, height))
    }

    /// The active panel configuration.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Read access to the framebuffer.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Fill the whole panel with `color`, ignoring the round mask.
    pub fn fill(&mut self, color: Rgb565) {
        self.framebuffer.fill(color);
    }

    /// Whether `(x, y)` lies on the visible panel surface.
    ///
    /// Always true for rectangular panels; for round panels, true inside the
    /// inscribed circle.
    pub fn on_panel(&self, x: u32, y: u32) -> bool {
        if x >= self.config.width || y >= self.config.height {
            return false;
        }
        if !self.config.round_mask {
            return true;
        }
        // Inscribed circle around the panel center; compare squared distances
        // in integer space to keep the mask exact.
        let cx = i64::from(self.config.width) - 1;
        let cy = i64::from(self.config.height) - 1;
        let dx = 2 * i64::from(x) - cx;
        let dy = 2 * i64::from(y) - cy;
        let diameter = i64::from(self.config.width.min(self.config.height));
        dx * dx + dy * dy <= diameter * diameter
    }

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        use image::{Rgba, RgbaImage};

        let mut img = RgbaImage::new(self.framebuffer.width(), self.framebuffer.height());
        for (x, y, pixel) in self.framebuffer.iter() {
            let (r, g, b) = expand_rgb565(pixel);
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
        img.save(path)?;
        Ok(())
    }
}

/// Expand RGB565 channels to 8 bits, replicating high bits into the low end.
fn expand_rgb565(color: Rgb565) -> (u8, u8, u8) {
    let r = (color.r() << 3) | (color.r() >> 2);
    let g = (color.g() << 2) | (color.g() >> 4);
    let b = (color.b() << 3) | (color.b() >> 2);
    (r, g, b)
}

impl DrawTarget for Emulator {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                let (x, y) = (point.x as u32, point.y as u32);
                if self.on_panel(x, y) {
                    self.framebuffer.set_pixel(x, y, color);
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Emulator {
    fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }
}
