//! Wearable UI Components
//!
//! Reusable UI components for small round wearable displays, rendered through
//! `embedded-graphics` onto any `DrawTarget`.
//!
//! # Components
//!
//! - `SyncIndicator` - Endless sync/loading indicator (three converging arcs)
//! - `SyncCycle` / `Ticker` - Repeating animation timeline driving a preview
//!
//! # Example
//!
//! ```no_run
//! use wear_components::prelude::*;
//! use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
//!
//! # struct NoopDisplay;
//! # impl DrawTarget for NoopDisplay {
//! #     type Color = Rgb565;
//! #     type Error = core::convert::Infallible;
//! #     fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
//! #     where I: IntoIterator<Item = Pixel<Self::Color>> { Ok(()) }
//! # }
//! # impl OriginDimensions for NoopDisplay {
//! #     fn size(&self) -> Size { Size::new(240, 240) }
//! # }
//! # let mut display = NoopDisplay;
//! let indicator = SyncIndicator::new(80).color(Rgb565::WHITE);
//! let progress = Progress::new(0.05).unwrap();
//! indicator.render(&mut display, Point::new(80, 80), progress)?;
//! # Ok::<(), core::convert::Infallible>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod progress;
pub mod sync_arcs;
pub mod sync_indicator;
pub mod timeline;

pub mod prelude {
    //! Convenience re-exports of the component surface.
    pub use crate::progress::*;
    pub use crate::sync_arcs::*;
    pub use crate::sync_indicator::*;
    pub use crate::timeline::*;
}
