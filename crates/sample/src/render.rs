//! Per-screen render functions.
//!
//! Explicit render-on-demand: the frame loop calls [`render_screen`] with the
//! current navigation target and animation progress, and the whole frame is
//! redrawn. No screen keeps state between frames.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use wear_components::prelude::*;

use crate::screen::Screen;

/// Header bar height in pixels.
const HEADER_HEIGHT: u32 = 36;

/// Accent color used for headers and the indicator.
const ACCENT: Rgb565 = Rgb565::new(14, 39, 26);

/// Render `screen` onto the full area of `display`.
pub fn render_screen<D>(screen: Screen, display: &mut D, progress: Progress) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(Rgb565::BLACK)?;
    match screen {
        Screen::Menu => render_menu(display),
        Screen::Sync => render_sync(display, progress),
        Screen::About => render_about(display),
    }
}

/// Header bar with the screen title.
fn render_header<D>(display: &mut D, screen: Screen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = display.bounding_box().size.width;
    Rectangle::new(Point::zero(), Size::new(width, HEADER_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(ACCENT))
        .draw(display)?;

    let style = MonoTextStyle::new(&FONT_10X20, Rgb565::BLACK);
    Text::new(screen.title(), Point::new(12, 25), style).draw(display)?;
    Ok(())
}

/// Root screen: the route table.
fn render_menu<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    render_header(display, Screen::Menu)?;

    let title_style = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
    let route_style = MonoTextStyle::new(&FONT_6X10, Rgb565::new(16, 32, 16));

    for (idx, screen) in Screen::ALL.into_iter().enumerate() {
        let y = HEADER_HEIGHT as i32 + 30 + (idx as i32) * 44;
        Text::new(screen.title(), Point::new(24, y), title_style).draw(display)?;
        Text::new(screen.route(), Point::new(24, y + 14), route_style).draw(display)?;
    }
    Ok(())
}

/// Sync screen: the animated indicator, centered.
fn render_sync<D>(display: &mut D, progress: Progress) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    render_header(display, Screen::Sync)?;

    let size = display.bounding_box().size;
    let diameter = (size.width.min(size.height) / 2).max(16);
    let indicator = SyncIndicator::new(diameter).color(ACCENT);

    let position = Point::new(
        (size.width.saturating_sub(diameter) / 2) as i32,
        (size.height.saturating_sub(diameter) / 2) as i32,
    );
    indicator.render(display, position, progress)?;

    let caption_style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
    let caption_y = position.y + diameter as i32 + 20;
    Text::new("Syncing...", Point::new(position.x, caption_y), caption_style).draw(display)?;
    Ok(())
}

/// About screen: static app info.
fn render_about<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    render_header(display, Screen::About)?;

    let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
    let lines = [
        "Wearable component kit",
        concat!("version ", env!("CARGO_PKG_VERSION")),
        "headless sample app",
    ];
    for (idx, line) in lines.into_iter().enumerate() {
        let y = HEADER_HEIGHT as i32 + 30 + (idx as i32) * 16;
        Text::new(line, Point::new(16, y), style).draw(display)?;
    }
    Ok(())
}
