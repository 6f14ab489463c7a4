//! Host event model.
//!
//! The host runtime (the simulator window standing in for the watch OS)
//! delivers these events one at a time on a single logical thread; a
//! callback always runs to completion before the next event is dispatched.
//! The face relies on that serialization instead of locks — a port onto a
//! host that dispatches from multiple threads must add its own
//! serialization in front of [`crate::face::WatchFace::handle`].

use chrono::NaiveDateTime;

/// An inbound host event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// The face became visible. Carries one peek of each feed so the
    /// initial render needs no further host calls.
    Show {
        now: NaiveDateTime,
        battery_raw: i16,
        bluetooth_connected: bool,
    },
    /// The face is being dismissed. Safe to deliver more than once.
    Hide,
    /// Minute rollover, carrying the current instant.
    MinuteTick(NaiveDateTime),
    /// Battery feed report. Raw and untrusted; the face clamps it.
    BatteryChanged(i16),
    /// Bluetooth connectivity report.
    BluetoothChanged(bool),
}
