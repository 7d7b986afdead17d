//! Pulse-width output abstractions
//!
//! Servo-class PWM: a fixed repetition period (50 Hz for hobby servos)
//! with a variable pulse width in the 1000-2000 us band.

/// Pulse-width modulated output channel
pub trait PwmOut {
    /// Set the active pulse width in microseconds
    ///
    /// The repetition period is fixed by the implementation; only the
    /// high time of each cycle changes.
    fn set_pulse_width_us(&mut self, us: u16);

    /// Disable the output (no pulses)
    fn disable(&mut self);
}
