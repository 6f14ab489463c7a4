//! Widgets of the watch face.
//!
//! Each widget is a pair of plain drawing functions over the simulator
//! display; ownership of the values they render lives in
//! [`crate::face::WatchFace`], which decides *when* to call them (dirty
//! tracking). Positions and styles are compile-time constants from
//! [`crate::config`] and [`crate::styles`].
//!
//! - [`clock`]: time and date labels
//! - [`battery`]: charge bar and its width law
//! - [`bluetooth`]: disconnect rune
//! - [`primitives`]: shared region-clear helper

pub mod battery;
pub mod bluetooth;
pub mod clock;
pub mod primitives;
