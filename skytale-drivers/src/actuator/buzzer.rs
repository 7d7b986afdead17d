//! Buzzer driver

use embedded_hal::delay::DelayNs;

use skytale_hal::OutputPin;

/// Binary buzzer on a GPIO line (active-high)
pub struct Buzzer<O: OutputPin> {
    pin: O,
}

impl<O: OutputPin> Buzzer<O> {
    /// Take ownership of the buzzer line, starting silent
    pub fn new(mut pin: O) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Drive the buzzer for a fixed duration, then silence it
    pub fn pulse(&mut self, delay: &mut impl DelayNs, duration_ms: u32) {
        self.pin.set_high();
        delay.delay_ms(duration_ms);
        self.pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        high: bool,
    }

    impl OutputPin for FakePin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_pulse_ends_silent() {
        let mut buzzer = Buzzer::new(FakePin { high: true });
        assert!(!buzzer.pin.is_set_high());

        buzzer.pulse(&mut NoDelay, 1000);
        assert!(!buzzer.pin.is_set_high());
    }
}
