//! Battery charge bar.
//!
//! The bar is an outlined rectangle whose fill width is a linear function
//! of the charge percentage:
//!
//! ```text
//! width = round(percent / 100 * BATTERY_BAR_MAX_WIDTH)
//! ```
//!
//! The width math is integer-only ((p * MAX + 50) / 100, round-half-up) so
//! the same pixel comes out on every platform. 0% maps to an empty bar,
//! 100% to the full fill width, and the function is monotone in between.

use embedded_graphics::{
    geometry::Size,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::{GRAY, WHITE},
    config::{BATTERY_BAR_HEIGHT, BATTERY_BAR_MAX_WIDTH, BATTERY_BAR_ORIGIN, BATTERY_BAR_OUTLINE},
    widgets::primitives::clear_region,
};

/// Gray 1px stroke for the bar outline.
const OUTLINE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// White fill for the charged portion.
const FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Fill width in pixels for a charge percentage.
///
/// Percent values above 100 are treated as full; the face clamps at the
/// event boundary, so this guard is only belt-and-braces for direct callers.
pub fn bar_width(percent: u8) -> u32 {
    let percent = u32::from(percent.min(100));
    (percent * BATTERY_BAR_MAX_WIDTH + 50) / 100
}

/// Draw the bar with the given fill width.
///
/// Clears the whole bar area first so a shrinking charge leaves no stale
/// fill pixels, then draws the outline and the fill.
pub fn draw_battery_bar(display: &mut SimulatorDisplay<Rgb565>, width: u32) {
    clear_region(display, BATTERY_BAR_OUTLINE);
    BATTERY_BAR_OUTLINE
        .into_styled(OUTLINE_STYLE)
        .draw(display)
        .ok();
    if width > 0 {
        Rectangle::new(BATTERY_BAR_ORIGIN, Size::new(width, BATTERY_BAR_HEIGHT))
            .into_styled(FILL_STYLE)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Width Law Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_bar_width_endpoints() {
        assert_eq!(bar_width(0), 0, "empty battery draws no fill");
        assert_eq!(
            bar_width(100),
            BATTERY_BAR_MAX_WIDTH,
            "full battery fills the whole bar"
        );
    }

    #[test]
    fn test_bar_width_matches_rounded_linear_law() {
        for percent in 0..=100u8 {
            let expected =
                (f64::from(percent) / 100.0 * f64::from(BATTERY_BAR_MAX_WIDTH)).round() as u32;
            assert_eq!(
                bar_width(percent),
                expected,
                "integer width law should equal round(p/100*MAX) at {percent}%"
            );
        }
    }

    #[test]
    fn test_bar_width_monotone() {
        let mut prev = bar_width(0);
        for percent in 1..=100u8 {
            let w = bar_width(percent);
            assert!(
                w >= prev,
                "width must be non-decreasing ({}% gave {w} after {prev})",
                percent
            );
            prev = w;
        }
    }

    #[test]
    fn test_bar_width_42_percent() {
        // round(0.42 * 80) = round(33.6) = 34
        assert_eq!(bar_width(42), 34);
    }

    #[test]
    fn test_bar_width_oversized_input_saturates() {
        assert_eq!(
            bar_width(255),
            BATTERY_BAR_MAX_WIDTH,
            "direct out-of-range input saturates at the full width"
        );
    }

    #[test]
    fn test_bar_width_never_exceeds_max() {
        for percent in 0..=u8::MAX {
            assert!(bar_width(percent) <= BATTERY_BAR_MAX_WIDTH);
        }
    }
}
