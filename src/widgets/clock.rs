//! Time and date labels.
//!
//! Both labels clear their region before drawing so a shorter string never
//! leaves remnants of a longer one. The caller guarantees both strings were
//! derived from the same instant before either draw function runs.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    config::{DATE_LABEL_POS, DATE_REGION, TIME_LABEL_POS, TIME_REGION},
    styles::{CENTERED, DATE_STYLE, TIME_STYLE},
    widgets::primitives::clear_region,
};

/// Draw the "HH:MM" time label.
pub fn draw_time(display: &mut SimulatorDisplay<Rgb565>, text: &str) {
    clear_region(display, TIME_REGION);
    Text::with_text_style(text, TIME_LABEL_POS, TIME_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "Dow Mon D" date label.
pub fn draw_date(display: &mut SimulatorDisplay<Rgb565>, text: &str) {
    clear_region(display, DATE_REGION);
    Text::with_text_style(text, DATE_LABEL_POS, DATE_STYLE, CENTERED)
        .draw(display)
        .ok();
}
