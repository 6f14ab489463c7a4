//! Application configuration constants.
//!
//! All widget geometry is computed at compile time. The face layout is fixed:
//! battery bar along the top edge, Bluetooth icon below it, the time label in
//! the vertical center and the date label underneath.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │         [██████░░░░]         │  battery bar (top, centered)
//! │              ᛒ               │  Bluetooth icon (visible when disconnected)
//! │                              │
//! │            07:09             │  time label (ProFont 24pt)
//! │          Tue Mar 5           │  date label
//! │                              │
//! └──────────────────────────────┘
//! ```

use std::time::Duration;

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (square watch panel, 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate, pre-computed as i32 for text anchoring.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Time / Date Label Layout
// =============================================================================

/// Baseline anchor of the time label (centered horizontally).
pub const TIME_LABEL_POS: Point = Point::new(CENTER_X, 118);

/// Region cleared before the time label is redrawn. Full width so stale
/// digits from a longer string never survive a redraw.
pub const TIME_REGION: Rectangle =
    Rectangle::new(Point::new(0, 88), Size::new(SCREEN_WIDTH, 40));

/// Baseline anchor of the date label (centered horizontally).
pub const DATE_LABEL_POS: Point = Point::new(CENTER_X, 162);

/// Region cleared before the date label is redrawn.
pub const DATE_REGION: Rectangle =
    Rectangle::new(Point::new(0, 144), Size::new(SCREEN_WIDTH, 26));

// =============================================================================
// Battery Bar Layout
// =============================================================================

/// Fill width of a full (100%) battery bar in pixels. The rendered width is
/// `round(percent / 100 * BATTERY_BAR_MAX_WIDTH)`.
pub const BATTERY_BAR_MAX_WIDTH: u32 = 80;

/// Height of the battery bar fill in pixels.
pub const BATTERY_BAR_HEIGHT: u32 = 8;

/// Top-left corner of the battery bar fill area (centered horizontally).
pub const BATTERY_BAR_ORIGIN: Point =
    Point::new(CENTER_X - (BATTERY_BAR_MAX_WIDTH / 2) as i32, 16);

/// Outline rectangle around the fill area, 2px larger on every side so the
/// 1px stroke never touches the fill.
pub const BATTERY_BAR_OUTLINE: Rectangle = Rectangle::new(
    Point::new(BATTERY_BAR_ORIGIN.x - 2, BATTERY_BAR_ORIGIN.y - 2),
    Size::new(BATTERY_BAR_MAX_WIDTH + 4, BATTERY_BAR_HEIGHT + 4),
);

// =============================================================================
// Bluetooth Icon Layout
// =============================================================================

/// Center point of the Bluetooth rune.
pub const BT_ICON_CENTER: Point = Point::new(CENTER_X, 48);

/// Region cleared when the icon is hidden. Covers the rune plus a margin.
pub const BT_ICON_REGION: Rectangle =
    Rectangle::new(Point::new(CENTER_X - 8, 38), Size::new(16, 20));

// =============================================================================
// Host Timing Configuration (simulator)
// =============================================================================

/// Host frame pacing. The event pump sleeps this long between iterations;
/// 20 Hz is plenty for a face that only changes on minute/sensor events.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Interval between simulated battery drain steps (1% per period).
pub const BATTERY_DRAIN_PERIOD: Duration = Duration::from_secs(30);

/// Battery change applied per Up/Down key press in the simulator.
pub const BATTERY_NUDGE_STEP: i16 = 5;
