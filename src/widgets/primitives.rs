//! Shared low-level drawing helpers.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::BACKGROUND;

/// Background fill used for every region clear.
/// `PrimitiveStyle::with_fill` is const fn in embedded-graphics 0.8.
const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

/// Restore a region to the face background color.
///
/// Called before a label redraw and when a widget becomes invisible, so
/// stale pixels never survive an update.
pub fn clear_region(display: &mut SimulatorDisplay<Rgb565>, region: Rectangle) {
    region.into_styled(CLEAR_STYLE).draw(display).ok();
}
