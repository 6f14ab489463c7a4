//! Minimalist watch face simulator.
//!
//! Renders a Pebble-style clock face on a 240x240 simulated panel: a large
//! centered time label, a date line below it, a battery charge bar along
//! the top, and a Bluetooth rune that appears while the phone link is down
//! (with a haptic pulse the moment it drops).
//!
//! The face itself lives in [`face::WatchFace`] and is driven purely by
//! [`events::HostEvent`] values. This binary plays the host: it owns the
//! fake battery and Bluetooth feeds, watches the wall clock for minute
//! rollovers, and translates window input into events. On real hardware
//! only this file changes; the controller and widgets are host-agnostic.
//!
//! # Controls (Simulator Mode)
//!
//! | Key    | Action                                      |
//! |--------|---------------------------------------------|
//! | `B`    | Toggle the Bluetooth link up/down           |
//! | `Up`   | Nudge battery +5% (can overshoot past 100)  |
//! | `Down` | Nudge battery -5% (can undershoot below 0)  |
//! | `T`    | Toggle 12h/24h time presentation            |
//!
//! Key repeat is ignored so holding `B` cannot spam haptic alerts.
//! The battery nudges deliberately run past the valid range: the raw value
//! goes to the controller unfiltered, which is where clamping belongs.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │         ▐█████░░░▌           │  battery bar (top center)
//! │                              │
//! │              ᛒ               │  bluetooth rune (only when down)
//! │                              │
//! │          07:09               │  time, ProFont 24pt
//! │         Tue Mar 5            │  date, 10x20
//! │                              │
//! └──────────────────────────────┘
//! ```

mod colors;
mod config;
mod events;
mod face;
mod format;
mod haptics;
mod state;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing_subscriber::EnvFilter;

use config::{BATTERY_DRAIN_PERIOD, BATTERY_NUDGE_STEP, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use events::HostEvent;
use face::WatchFace;
use format::ClockStyle;
use haptics::SimulatorHaptics;

/// Fake battery feed.
///
/// Drains 1% every [`BATTERY_DRAIN_PERIOD`] and takes key nudges. The level
/// is allowed to run somewhat past 0..=100 so the controller's boundary
/// clamping is reachable from the keyboard.
struct BatteryFeed {
    level: i16,
    last_drain: Instant,
}

impl BatteryFeed {
    fn new(level: i16) -> Self {
        Self {
            level,
            last_drain: Instant::now(),
        }
    }

    /// Current raw reading, for the startup peek.
    fn peek(&self) -> i16 {
        self.level
    }

    /// Apply a key nudge and return the new raw reading.
    fn nudge(&mut self, delta: i16) -> i16 {
        self.level = (self.level + delta).clamp(-20, 120);
        self.level
    }

    /// Returns the new reading when a drain period has elapsed.
    fn poll_drain(&mut self) -> Option<i16> {
        if self.level > 0 && self.last_drain.elapsed() >= BATTERY_DRAIN_PERIOD {
            self.last_drain = Instant::now();
            self.level -= 1;
            Some(self.level)
        } else {
            None
        }
    }
}

fn init_logging() {
    // RUST_LOG overrides; default to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_logging();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watch Face", &output_settings);

    // ==========================================================================
    // Host State
    // ==========================================================================

    let mut face = WatchFace::new(ClockStyle::H24);
    let mut haptics = SimulatorHaptics::new();
    let mut battery = BatteryFeed::new(42);
    let mut bluetooth_connected = true;

    // Startup: peek each feed once, then show the face fully populated.
    // The peeked Bluetooth value sets the icon but never fires the alert.
    let now = Local::now().naive_local();
    let mut last_minute = now.minute();
    face.handle(
        &mut display,
        HostEvent::Show {
            now,
            battery_raw: battery.peek(),
            bluetooth_connected,
        },
        &mut haptics,
    );

    // ==========================================================================
    // Host Event Loop
    // ==========================================================================

    'running: loop {
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // B: flip the phone link
                        Keycode::B => {
                            bluetooth_connected = !bluetooth_connected;
                            face.handle(
                                &mut display,
                                HostEvent::BluetoothChanged(bluetooth_connected),
                                &mut haptics,
                            );
                        }
                        // Up/Down: battery nudges, raw value passed through
                        Keycode::Up => {
                            let raw = battery.nudge(BATTERY_NUDGE_STEP);
                            face.handle(&mut display, HostEvent::BatteryChanged(raw), &mut haptics);
                        }
                        Keycode::Down => {
                            let raw = battery.nudge(-BATTERY_NUDGE_STEP);
                            face.handle(&mut display, HostEvent::BatteryChanged(raw), &mut haptics);
                        }
                        // T: 12h <-> 24h
                        Keycode::T => {
                            let style = face.clock_style().toggle();
                            face.set_clock_style(&mut display, style);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Minute tick: fire once when the wall-clock minute rolls over
        let now = Local::now().naive_local();
        if now.minute() != last_minute {
            last_minute = now.minute();
            face.handle(&mut display, HostEvent::MinuteTick(now), &mut haptics);
        }

        // Battery drain feed
        if let Some(raw) = battery.poll_drain() {
            face.handle(&mut display, HostEvent::BatteryChanged(raw), &mut haptics);
        }

        thread::sleep(FRAME_TIME);
    }

    // Window closed: deliver Hide so teardown follows the same path a real
    // host would take when the face is dismissed
    face.handle(&mut display, HostEvent::Hide, &mut haptics);
}
