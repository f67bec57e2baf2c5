//! Pixel-level rendering tests for the sync indicator, run against the
//! headless test display.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use wear_components::prelude::*;
use wear_testing::TestDisplay;

const BG: Rgb565 = Rgb565::BLACK;

fn rendered_at(progress: f32) -> TestDisplay {
    let mut t = TestDisplay::new(96, 96);
    let indicator = SyncIndicator::new(64).color(Rgb565::WHITE).background(BG);
    indicator
        .render(&mut *t, Point::new(16, 16), Progress::new(progress).unwrap())
        .unwrap();
    t
}

#[test]
fn outer_arc_paints_at_rest() {
    let t = rendered_at(0.0);
    // At progress 0 every animated sweep is zero, so only the fixed outer arc
    // paints — in the pure indicator color.
    assert!(t.pixel_count_of_color(t.bounds(), Rgb565::WHITE) > 0);
}

#[test]
fn glyph_center_stays_clean_at_rest() {
    let t = rendered_at(0.0);
    // The middle of the glyph holds the (not yet visible) inner rings.
    let center = Rectangle::new(Point::new(44, 44), Size::new(8, 8));
    assert!(t.assert_region_uniform(center, BG).is_ok());
}

#[test]
fn rings_add_paint_mid_animation() {
    let early = rendered_at(0.05);
    let done = rendered_at(1.0);
    let bounds = early.bounds();
    // Mid-animation all three rings are visible on top of the outer arc; at
    // the end they are fully faded out and only the outer arc remains.
    assert!(early.painted_pixel_count(bounds, BG) > done.painted_pixel_count(bounds, BG));
}

#[test]
fn faded_rings_leave_outer_arc_only() {
    let rest = rendered_at(0.0);
    let done = rendered_at(1.0);
    let bounds = rest.bounds();
    // progress 0 and progress 1 both reduce to the fixed outer arc.
    assert_eq!(
        rest.painted_pixel_count(bounds, BG),
        done.painted_pixel_count(bounds, BG)
    );
}

#[test]
fn blended_rings_are_dimmer_than_the_glyph_color() {
    let t = rendered_at(0.05);
    // Rings at partial alpha paint blended colors, never pure white outside
    // the outer arc's own pixels; at least one non-white painted pixel must
    // exist once the rings are visible.
    let painted = t.painted_pixel_count(t.bounds(), BG);
    let pure = t.pixel_count_of_color(t.bounds(), Rgb565::WHITE);
    assert!(painted > pure);
}

#[test]
fn indicator_respects_its_bounding_box() {
    let t = rendered_at(0.05);
    // Stroke and round caps may extend half a stroke width past the glyph
    // circle, never further. Everything outside the box plus that margin
    // stays background.
    assert!(t
        .assert_region_uniform(Rectangle::new(Point::zero(), Size::new(96, 10)), BG)
        .is_ok());
    assert!(t
        .assert_region_uniform(Rectangle::new(Point::new(0, 86), Size::new(96, 10)), BG)
        .is_ok());
    assert!(t
        .assert_region_uniform(Rectangle::new(Point::zero(), Size::new(10, 96)), BG)
        .is_ok());
    assert!(t
        .assert_region_uniform(Rectangle::new(Point::new(86, 0), Size::new(10, 96)), BG)
        .is_ok());
}

#[test]
fn butt_cap_paints_no_end_dots() {
    let stroke = IndicatorStroke {
        width: 4,
        cap: StrokeCap::Butt,
    };
    let mut butt = TestDisplay::new(96, 96);
    SyncIndicator::new(64)
        .color(Rgb565::WHITE)
        .stroke(stroke)
        .render(&mut *butt, Point::new(16, 16), Progress::new(0.05).unwrap())
        .unwrap();

    let round = rendered_at(0.05);
    let bounds = round.bounds();
    // Round caps only ever add pixels on top of the butt-capped arcs.
    assert!(round.painted_pixel_count(bounds, BG) >= butt.painted_pixel_count(bounds, BG));
}

#[test]
fn out_of_range_progress_is_rejected() {
    assert!(Progress::new(-0.01).is_err());
    assert!(Progress::new(1.01).is_err());
}
