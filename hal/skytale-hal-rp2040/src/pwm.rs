//! RP2040 servo PWM wrapper

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;

use skytale_hal::pwm::PwmOut;

/// Counter top for a 20 ms period at a 1 MHz tick
const SERVO_PERIOD_TICKS: u16 = 19_999;

/// System clock divider yielding a 1 us PWM tick (125 MHz / 125)
const SERVO_CLOCK_DIVIDER: u8 = 125;

/// Servo-class PWM channel: 50 Hz period, pulse width in microseconds
///
/// Each servo gets the A channel of its own PWM slice, so the compare
/// value is the pulse width directly.
pub struct ServoPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> ServoPwm<'d> {
    /// Configure a PWM slice for servo output, starting with no pulses
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = SERVO_CLOCK_DIVIDER.to_fixed();
        config.top = SERVO_PERIOD_TICKS;
        config.compare_a = 0;

        let mut channel = Self { pwm, config };
        channel.apply();
        channel
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl PwmOut for ServoPwm<'_> {
    fn set_pulse_width_us(&mut self, us: u16) {
        self.config.compare_a = us.min(SERVO_PERIOD_TICKS);
        self.apply();
    }

    fn disable(&mut self) {
        self.config.compare_a = 0;
        self.apply();
    }
}
