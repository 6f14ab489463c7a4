//! Haptic feedback seam.
//!
//! The real watch drives a vibration motor; the simulator has nothing to
//! shake, so the trait keeps the face testable and the simulator
//! implementation just logs the pulse.

/// Something that can emit a short vibration pulse.
pub trait Haptics {
    /// Emit one pulse. Fire-and-forget; the face never waits on it.
    fn pulse(&mut self);
}

/// Simulator stand-in for the vibration motor.
#[derive(Default)]
pub struct SimulatorHaptics;

impl SimulatorHaptics {
    pub const fn new() -> Self {
        Self
    }
}

impl Haptics for SimulatorHaptics {
    fn pulse(&mut self) {
        tracing::info!("haptic pulse");
    }
}
