//! The display state controller.
//!
//! One [`WatchFace`] instance owns everything visible: the cached
//! [`FaceState`], the Bluetooth edge detector, and a record of what each
//! widget last drew. Host events arrive through [`WatchFace::handle`] (or
//! the individual callbacks it fans out to) strictly serialized on one
//! logical thread — see [`crate::events`] for the dispatch contract — so no
//! synchronization is needed around the widget set.
//!
//! # Dirty Tracking
//!
//! Every callback recomputes the derived value for its widget (string, bar
//! width, icon visibility) and compares it against [`DrawnFace`] before
//! touching the display. A minute tick that changes the time but not the
//! date repaints only the time label; a battery report that lands on the
//! same pixel width repaints nothing.
//!
//! # Joint Time/Date Update
//!
//! Both label strings are derived from the single instant stored in
//! `FaceState` inside one synchronous callback, so the two labels can never
//! reflect different ticks.
//!
//! # Lifecycle
//!
//! `Show` populates state from one peek of each feed and performs a full
//! repaint; `Hide` drops the state and blanks the panel. `Hide` is
//! idempotent and every other event is ignored while the face is hidden.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use chrono::NaiveDateTime;

use crate::{
    colors::BACKGROUND,
    events::HostEvent,
    format::{self, ClockStyle, DATE_STR_LEN, TIME_STR_LEN},
    haptics::Haptics,
    state::{BluetoothLink, FaceState, clamp_percent},
    widgets::{
        battery::{bar_width, draw_battery_bar},
        bluetooth::{clear_bluetooth_icon, draw_bluetooth_icon},
        clock::{draw_date, draw_time},
    },
};

/// What each widget last drew. `None` means the widget has not been drawn
/// since the face was shown, forcing the first repaint.
#[derive(Default)]
struct DrawnFace {
    time_str: Option<String<TIME_STR_LEN>>,
    date_str: Option<String<DATE_STR_LEN>>,
    bar_width: Option<u32>,
    icon_visible: Option<bool>,
}

/// The clock face and all state needed to keep it current.
pub struct WatchFace {
    style: ClockStyle,
    /// `Some` while shown; `None` between `Hide` and the next `Show`.
    state: Option<FaceState>,
    link: BluetoothLink,
    drawn: DrawnFace,
}

impl WatchFace {
    /// A hidden face. Nothing is drawn until the host delivers `Show`.
    pub fn new(style: ClockStyle) -> Self {
        Self {
            style,
            state: None,
            link: BluetoothLink::new(),
            drawn: DrawnFace::default(),
        }
    }

    /// Whether the face is currently shown.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Current hour presentation.
    pub fn clock_style(&self) -> ClockStyle {
        self.style
    }

    /// Dispatch one host event to the matching callback.
    pub fn handle(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
        event: HostEvent,
        haptics: &mut impl Haptics,
    ) {
        tracing::debug!(?event, "host event");
        match event {
            HostEvent::Show {
                now,
                battery_raw,
                bluetooth_connected,
            } => self.show(display, now, battery_raw, bluetooth_connected),
            HostEvent::Hide => self.hide(display),
            HostEvent::MinuteTick(instant) => self.minute_tick(display, instant),
            HostEvent::BatteryChanged(raw) => self.battery_changed(display, raw),
            HostEvent::BluetoothChanged(connected) => {
                self.bluetooth_changed(display, connected, haptics);
            }
        }
    }

    /// Populate state from the startup peeks and paint the whole face.
    ///
    /// The Bluetooth detector is re-primed here, so the peeked value sets
    /// the icon correctly but can never fire the haptic alert.
    pub fn show(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
        now: NaiveDateTime,
        battery_raw: i16,
        bluetooth_connected: bool,
    ) {
        tracing::info!(battery_raw, bluetooth_connected, "face shown");
        self.state = Some(FaceState::new(now, battery_raw, bluetooth_connected));
        self.link = BluetoothLink::new();
        self.link.update(bluetooth_connected);
        self.drawn = DrawnFace::default();

        display.clear(BACKGROUND).ok();
        self.redraw_clock(display);
        self.redraw_battery(display);
        self.redraw_bluetooth(display);
    }

    /// Drop the face state and blank the panel.
    ///
    /// Safe against double delivery: the second call finds no state and
    /// returns without touching the display again.
    pub fn hide(&mut self, display: &mut SimulatorDisplay<Rgb565>) {
        if self.state.take().is_none() {
            return;
        }
        tracing::info!("face hidden");
        self.drawn = DrawnFace::default();
        display.clear(BACKGROUND).ok();
    }

    /// Store the tick instant and refresh both labels from it.
    pub fn minute_tick(&mut self, display: &mut SimulatorDisplay<Rgb565>, instant: NaiveDateTime) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.time = instant;
        self.redraw_clock(display);
    }

    /// Clamp, store, and redraw the bar if its pixel width changed.
    pub fn battery_changed(&mut self, display: &mut SimulatorDisplay<Rgb565>, raw: i16) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let percent = clamp_percent(raw);
        state.battery_percent = percent;
        tracing::debug!(percent, "battery changed");
        self.redraw_battery(display);
    }

    /// Store the link state, toggle the icon, and pulse the motor on a
    /// connected→disconnected edge.
    pub fn bluetooth_changed(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
        connected: bool,
        haptics: &mut impl Haptics,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.bluetooth_connected = connected;
        if self.link.update(connected) {
            tracing::info!("bluetooth link lost, alerting wearer");
            haptics.pulse();
        }
        self.redraw_bluetooth(display);
    }

    /// Flip the 12/24h presentation and refresh the time label.
    pub fn set_clock_style(&mut self, display: &mut SimulatorDisplay<Rgb565>, style: ClockStyle) {
        if style == self.style {
            return;
        }
        self.style = style;
        self.redraw_clock(display);
    }

    fn redraw_clock(&mut self, display: &mut SimulatorDisplay<Rgb565>) {
        let Some(state) = self.state else {
            return;
        };
        // Both strings come from the one stored instant.
        let time_str = format::time_string(&state.time, self.style);
        let date_str = format::date_string(&state.time);
        if self.drawn.time_str.as_ref() != Some(&time_str) {
            draw_time(display, &time_str);
            self.drawn.time_str = Some(time_str);
        }
        if self.drawn.date_str.as_ref() != Some(&date_str) {
            draw_date(display, &date_str);
            self.drawn.date_str = Some(date_str);
        }
    }

    fn redraw_battery(&mut self, display: &mut SimulatorDisplay<Rgb565>) {
        let Some(state) = self.state else {
            return;
        };
        let width = bar_width(state.battery_percent);
        if self.drawn.bar_width != Some(width) {
            draw_battery_bar(display, width);
            self.drawn.bar_width = Some(width);
        }
    }

    fn redraw_bluetooth(&mut self, display: &mut SimulatorDisplay<Rgb565>) {
        let Some(state) = self.state else {
            return;
        };
        // Icon is visible exactly when the link is down.
        let visible = !state.bluetooth_connected;
        if self.drawn.icon_visible != Some(visible) {
            if visible {
                draw_bluetooth_icon(display);
            } else {
                clear_bluetooth_icon(display);
            }
            self.drawn.icon_visible = Some(visible);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
