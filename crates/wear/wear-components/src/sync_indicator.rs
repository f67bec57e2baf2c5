//! Endless sync indicator component.
//!
//! Represents a process that is syncing without a known end. One fixed outer
//! arc plus the three animated rings from [`crate::sync_arcs`], drawn at
//! full, half and quarter size of the glyph's bounding box. The caller owns
//! the animation clock: pass a fresh [`Progress`] every frame and the glyph
//! is recomputed from scratch, no state is kept between calls.

use embedded_graphics::{
    geometry::Angle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, PrimitiveStyle},
};

use crate::progress::Progress;
use crate::sync_arcs::{ring_alpha, ring_angles, ArcAngles, Ring};

/// Fixed outer arc geometry, in degrees.
const OUTER_START: f32 = 12.0;
const OUTER_SWEEP: f32 = 245.0;

/// Stroke terminal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    /// Rounded stroke ends.
    #[default]
    Round,
    /// Flat stroke ends.
    Butt,
}

/// Stroke applied to every arc of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorStroke {
    /// Stroke width in pixels.
    pub width: u32,
    /// Terminal shape of each arc.
    pub cap: StrokeCap,
}

impl Default for IndicatorStroke {
    fn default() -> Self {
        Self {
            width: 4,
            cap: StrokeCap::Round,
        }
    }
}

/// Endless sync indicator.
pub struct SyncIndicator {
    diameter: u32,
    color: Rgb565,
    background: Rgb565,
    stroke: IndicatorStroke,
}

impl SyncIndicator {
    /// Create a new indicator with the given glyph diameter.
    pub fn new(diameter: u32) -> Self {
        Self {
            diameter,
            color: Rgb565::WHITE,
            background: Rgb565::BLACK,
            stroke: IndicatorStroke::default(),
        }
    }

    /// Set the arc color.
    pub fn color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Set the background the rings fade toward.
    ///
    /// RGB565 has no alpha channel; ring opacity is realized by blending the
    /// arc color toward this background.
    pub fn background(mut self, background: Rgb565) -> Self {
        self.background = background;
        self
    }

    /// Set the stroke used for every arc.
    pub fn stroke(mut self, stroke: IndicatorStroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Get glyph dimensions.
    pub fn dimensions(&self) -> Size {
        Size::new(self.diameter, self.diameter)
    }

    /// Render the indicator to `display` with its bounding box at `position`.
    pub fn render<D>(
        &self,
        display: &mut D,
        position: Point,
        progress: Progress,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Outer arc: fixed geometry, never fades.
        self.draw_arc(
            display,
            position,
            self.diameter,
            ArcAngles {
                start: OUTER_START,
                sweep: OUTER_SWEEP,
            },
            self.color,
        )?;

        let side = self.diameter as f32;

        // Ring bounding boxes: the end ring fills the glyph box, the middle
        // ring is half size, the center ring quarter size, both inner boxes
        // offset toward the middle of the glyph.
        let center_box = (
            position + offset(side / 2.0 / 1.6, side / 2.0 / 1.2),
            self.diameter / 4,
        );
        let middle_box = (
            position + offset(side / 4.0, side / 2.0 / 2.2),
            self.diameter / 2,
        );
        let end_box = (position, self.diameter);

        for (ring, (top_left, diameter)) in
            Ring::ALL.into_iter().zip([center_box, middle_box, end_box])
        {
            let angles = ring_angles(progress, ring);
            let alpha = ring_alpha(progress, ring);
            // A zero-length or fully faded arc paints nothing.
            if angles.sweep == 0.0 || alpha <= 0.0 {
                continue;
            }
            let color = blend(self.color, self.background, alpha);
            self.draw_arc(display, top_left, diameter, angles, color)?;
        }

        Ok(())
    }

    /// Draw one stroked arc, plus end-cap dots when the cap is round.
    fn draw_arc<D>(
        &self,
        display: &mut D,
        top_left: Point,
        diameter: u32,
        angles: ArcAngles,
        color: Rgb565,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Arc::new(
            top_left,
            diameter,
            Angle::from_degrees(angles.start),
            Angle::from_degrees(angles.sweep),
        )
        .into_styled(PrimitiveStyle::with_stroke(color, self.stroke.width))
        .draw(display)?;

        if self.stroke.cap == StrokeCap::Round && self.stroke.width > 2 {
            let radius = diameter as f32 / 2.0;
            let center = top_left + offset(radius, radius);
            for angle in [angles.start, angles.start + angles.sweep] {
                Circle::with_center(arc_endpoint(center, radius, angle), self.stroke.width)
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(display)?;
            }
        }

        Ok(())
    }
}

/// Round an (x, y) offset in pixels to an integer point.
fn offset(x: f32, y: f32) -> Point {
    Point::new(libm::roundf(x) as i32, libm::roundf(y) as i32)
}

/// Point on the arc circle at `degrees`.
///
/// 0° lies on the positive x axis; positive angles advance counterclockwise
/// in screen space (y grows downward, hence the negated sine).
fn arc_endpoint(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    center
        + offset(
            radius * libm::cosf(radians),
            -radius * libm::sinf(radians),
        )
}

/// Blend `fg` toward `bg` by `alpha` (1.0 = pure `fg`, 0.0 = pure `bg`).
fn blend(fg: Rgb565, bg: Rgb565, alpha: f32) -> Rgb565 {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |fg_ch: u8, bg_ch: u8| -> u8 {
        let v = f32::from(bg_ch) + (f32::from(fg_ch) - f32::from(bg_ch)) * a;
        (v + 0.5) as u8
    };
    Rgb565::new(mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_creation() {
        let indicator = SyncIndicator::new(80);
        assert_eq!(indicator.diameter, 80);
        assert_eq!(indicator.color, Rgb565::WHITE);
        assert_eq!(indicator.background, Rgb565::BLACK);
    }

    #[test]
    fn test_indicator_builder() {
        let stroke = IndicatorStroke {
            width: 6,
            cap: StrokeCap::Butt,
        };
        let indicator = SyncIndicator::new(64)
            .color(Rgb565::GREEN)
            .background(Rgb565::new(4, 8, 4))
            .stroke(stroke);
        assert_eq!(indicator.color, Rgb565::GREEN);
        assert_eq!(indicator.stroke, stroke);
    }

    #[test]
    fn test_indicator_dimensions() {
        let indicator = SyncIndicator::new(48);
        assert_eq!(indicator.dimensions(), Size::new(48, 48));
    }

    #[test]
    fn test_default_stroke_is_round() {
        let stroke = IndicatorStroke::default();
        assert_eq!(stroke.width, 4);
        assert_eq!(stroke.cap, StrokeCap::Round);
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(Rgb565::WHITE, Rgb565::BLACK, 1.0), Rgb565::WHITE);
        assert_eq!(blend(Rgb565::WHITE, Rgb565::BLACK, 0.0), Rgb565::BLACK);
    }

    #[test]
    fn test_blend_midpoint_is_between() {
        let half = blend(Rgb565::WHITE, Rgb565::BLACK, 0.5);
        assert!(half.r() > 0 && half.r() < Rgb565::WHITE.r());
        assert!(half.g() > 0 && half.g() < Rgb565::WHITE.g());
    }

    #[test]
    fn test_arc_endpoint_on_axis() {
        let center = Point::new(100, 100);
        let east = arc_endpoint(center, 10.0, 0.0);
        assert_eq!(east, Point::new(110, 100));
        let north = arc_endpoint(center, 10.0, 90.0);
        // y grows downward: 90° is straight up from the center
        assert_eq!(north.x, 100);
        assert_eq!(north.y, 90);
    }
}
