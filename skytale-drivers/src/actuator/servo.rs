//! Pointing servo driver

use skytale_core::config::SERVO_NEUTRAL_PULSE_US;
use skytale_hal::PwmOut;

/// Hobby servo on a PWM channel
///
/// Positions are commanded as pulse widths in the 1000-2000 us band; the
/// PWM channel fixes the 50 Hz repetition period.
pub struct Servo<P: PwmOut> {
    pwm: P,
}

impl<P: PwmOut> Servo<P> {
    /// Take ownership of the PWM channel, starting at neutral
    pub fn new(mut pwm: P) -> Self {
        pwm.set_pulse_width_us(SERVO_NEUTRAL_PULSE_US);
        Self { pwm }
    }

    /// Command a position as a pulse width in microseconds
    pub fn set_pulse_us(&mut self, us: u16) {
        self.pwm.set_pulse_width_us(us);
    }

    /// Return to the neutral position
    pub fn neutral(&mut self) {
        self.pwm.set_pulse_width_us(SERVO_NEUTRAL_PULSE_US);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePwm {
        last_us: u16,
    }

    impl PwmOut for FakePwm {
        fn set_pulse_width_us(&mut self, us: u16) {
            self.last_us = us;
        }

        fn disable(&mut self) {
            self.last_us = 0;
        }
    }

    #[test]
    fn test_starts_neutral_then_tracks_commands() {
        let mut servo = Servo::new(FakePwm { last_us: 0 });
        assert_eq!(servo.pwm.last_us, SERVO_NEUTRAL_PULSE_US);

        servo.set_pulse_us(1710);
        assert_eq!(servo.pwm.last_us, 1710);

        servo.neutral();
        assert_eq!(servo.pwm.last_us, SERVO_NEUTRAL_PULSE_US);
    }
}
