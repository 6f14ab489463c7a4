//! Face state and the Bluetooth edge detector.
//!
//! The face caches exactly three values between host events: the instant of
//! the last minute tick, the battery percentage, and the Bluetooth link
//! state. Everything else on screen is derived from these on redraw.
//!
//! # Battery Clamping
//!
//! The host battery feed reports an integer percentage that cannot be
//! trusted to stay in range. Every inbound reading passes through
//! [`clamp_percent`] at the event boundary, so the stored value carries the
//! 0..=100 invariant everywhere else in the crate.
//!
//! # Bluetooth Edge Detection
//!
//! The disconnect alert is edge-triggered: it fires only on a
//! connected→disconnected transition, never on repeated disconnected
//! reports. The very first report after the face is shown is the peeked
//! startup value and must never alert, whatever it is — [`BluetoothLink`]
//! implements that with a `primed` flag that is false until the first
//! `update` call has been absorbed.

use chrono::NaiveDateTime;

/// Clamp a raw host battery reading to a valid percentage.
///
/// Out-of-range values are silently clamped per the platform contract;
/// there is no error surface on a watch face.
pub fn clamp_percent(raw: i16) -> u8 {
    raw.clamp(0, 100) as u8
}

/// The cached values the face needs to redraw itself.
#[derive(Clone, Copy, Debug)]
pub struct FaceState {
    /// Instant of the most recent minute tick (or the startup peek).
    pub time: NaiveDateTime,
    /// Battery charge, always 0..=100.
    pub battery_percent: u8,
    /// Current Bluetooth link state.
    pub bluetooth_connected: bool,
}

impl FaceState {
    /// Populate initial state from one peek of each host feed.
    pub fn new(now: NaiveDateTime, battery_raw: i16, bluetooth_connected: bool) -> Self {
        Self {
            time: now,
            battery_percent: clamp_percent(battery_raw),
            bluetooth_connected,
        }
    }
}

/// Edge detector for the Bluetooth connectivity feed.
pub struct BluetoothLink {
    connected: bool,
    /// False until the first update has been absorbed. Suppresses the
    /// startup alert regardless of the peeked value.
    primed: bool,
}

impl BluetoothLink {
    /// Detector in the unprimed startup state.
    pub const fn new() -> Self {
        Self {
            connected: false,
            primed: false,
        }
    }

    /// Stored link state as of the last update.
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Absorb a connectivity report. Returns `true` exactly when a haptic
    /// alert is due: a primed connected→disconnected transition.
    pub fn update(&mut self, connected: bool) -> bool {
        let alert = self.primed && self.connected && !connected;
        self.connected = connected;
        self.primed = true;
        alert
    }
}

impl Default for BluetoothLink {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
