//! Arc geometry for the sync indicator.
//!
//! Pure per-frame math: given the animation progress, each of the three
//! concentric rings gets a start angle, a sweep angle and an opacity. The
//! rings share one speed constant but divide it differently, so the inner
//! ring collapses first and the outer ring trails it — the staggered
//! converging-circles effect.

use crate::progress::Progress;

/// Angular speed shared by all three rings.
const SWEEP_SPEED: f32 = 12.0;

/// One of the three concentric animated arcs, named inside-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    /// Innermost arc, quarter of the glyph's bounding box.
    Center,
    /// Middle arc, half of the glyph's bounding box.
    Middle,
    /// Outermost animated arc, full bounding box.
    End,
}

impl Ring {
    /// All rings, inside-out.
    pub const ALL: [Ring; 3] = [Ring::Center, Ring::Middle, Ring::End];

    /// Divisor applied to the shared speed for the sweep animation.
    /// Smaller divisor = faster ring.
    fn angle_divisor(self) -> f32 {
        match self {
            Ring::Center => 1.0,
            Ring::Middle => 4.0,
            Ring::End => 6.0,
        }
    }

    /// Divisor applied to the shared speed for the fade-out.
    fn fade_divisor(self) -> f32 {
        match self {
            Ring::Center => 6.0,
            Ring::Middle => 8.0,
            Ring::End => 12.0,
        }
    }
}

/// Start/sweep pair for one ring at one animation instant, in degrees.
///
/// Negative sweep means the arc is swept clockwise from the start angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAngles {
    /// Angle the arc starts at.
    pub start: f32,
    /// Signed arc length drawn from the start angle.
    pub sweep: f32,
}

/// Compute the arc geometry of `ring` at `progress`.
///
/// Every ring travels from (start 45°, sweep 0°) to (start 0°, sweep −90°),
/// clamping at the terminal values once its paced progress passes 1.
#[must_use]
pub fn ring_angles(progress: Progress, ring: Ring) -> ArcAngles {
    let paced = progress.value() * SWEEP_SPEED / ring.angle_divisor();
    ArcAngles {
        start: (45.0 - 45.0 * paced).max(0.0),
        sweep: (0.0 - 90.0 * paced).max(-90.0),
    }
}

/// Opacity of `ring` at `progress`: 1.0 fully opaque, 0.0 fully faded.
#[must_use]
pub fn ring_alpha(progress: Progress, ring: Ring) -> f32 {
    (1.0 - progress.value() * SWEEP_SPEED / ring.fade_divisor()).max(0.0)
}
