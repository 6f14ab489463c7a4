//! Bluetooth disconnect rune.
//!
//! The rune is the classic ᛒ shape built from five line segments, drawn the
//! same way the charge bar outline is: 1px strokes from compile-time
//! endpoints relative to [`BT_ICON_CENTER`]. It is visible exactly when the
//! link is down, so a wearer who glances at the face knows notifications
//! are not arriving.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::WHITE,
    config::{BT_ICON_CENTER, BT_ICON_REGION},
    widgets::primitives::clear_region,
};

const RUNE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Rune half-height in pixels.
const HALF_H: i32 = 7;
/// Rune half-width in pixels.
const HALF_W: i32 = 4;

/// Draw the rune centered on [`BT_ICON_CENTER`].
pub fn draw_bluetooth_icon(display: &mut SimulatorDisplay<Rgb565>) {
    let c = BT_ICON_CENTER;
    let top = Point::new(c.x, c.y - HALF_H);
    let bottom = Point::new(c.x, c.y + HALF_H);
    let upper_right = Point::new(c.x + HALF_W, c.y - HALF_H / 2);
    let lower_right = Point::new(c.x + HALF_W, c.y + HALF_H / 2);
    let upper_left = Point::new(c.x - HALF_W, c.y - HALF_H / 2);
    let lower_left = Point::new(c.x - HALF_W, c.y + HALF_H / 2);

    // Stem, then the two chevrons that cross it
    for (from, to) in [
        (top, bottom),
        (top, upper_right),
        (upper_right, lower_left),
        (bottom, lower_right),
        (lower_right, upper_left),
    ] {
        Line::new(from, to).into_styled(RUNE_STYLE).draw(display).ok();
    }
}

/// Remove the rune by restoring its region to the background.
pub fn clear_bluetooth_icon(display: &mut SimulatorDisplay<Rgb565>) {
    clear_region(display, BT_ICON_REGION);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_fits_clear_region() {
        // Every segment endpoint must lie inside the region cleared by
        // clear_bluetooth_icon, otherwise hiding the icon leaves pixels.
        let c = BT_ICON_CENTER;
        let corners = [
            Point::new(c.x - HALF_W, c.y - HALF_H),
            Point::new(c.x + HALF_W, c.y - HALF_H),
            Point::new(c.x - HALF_W, c.y + HALF_H),
            Point::new(c.x + HALF_W, c.y + HALF_H),
        ];
        for p in corners {
            assert!(
                BT_ICON_REGION.contains(p),
                "rune extent {p:?} must be inside BT_ICON_REGION"
            );
        }
    }
}
