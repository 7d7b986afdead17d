//! Debounced start-gate button

use skytale_core::config::GATE_DEBOUNCE_SAMPLES;
use skytale_core::present::Debouncer;
use skytale_hal::InputPin;

/// Active-low gate button (pull-up wiring: pressed reads low)
///
/// The panel idles until the gate reads ready; each call samples the pin
/// once, so the caller's poll interval sets the debounce timebase.
pub struct GateButton<I: InputPin> {
    pin: I,
    debouncer: Debouncer,
}

impl<I: InputPin> GateButton<I> {
    /// Wrap the gate input pin
    pub fn new(pin: I) -> Self {
        let initial = pin.is_low();
        Self {
            pin,
            debouncer: Debouncer::new(GATE_DEBOUNCE_SAMPLES, initial),
        }
    }

    /// Sample the pin once and return the debounced gate state
    pub fn is_ready(&mut self) -> bool {
        let raw = self.pin.is_low();
        self.debouncer.update(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct ScriptedPin<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for ScriptedPin<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    #[test]
    fn test_press_is_accepted_after_debounce() {
        let level = Cell::new(true); // released (pulled up)
        let mut button = GateButton::new(ScriptedPin { level: &level });

        assert!(!button.is_ready());

        level.set(false); // pressed
        assert!(!button.is_ready());
        assert!(!button.is_ready());
        assert!(button.is_ready());
    }

    #[test]
    fn test_bounce_does_not_release_the_gate() {
        let level = Cell::new(false);
        let mut button = GateButton::new(ScriptedPin { level: &level });
        assert!(button.is_ready());

        level.set(true); // single-sample glitch
        button.is_ready();
        level.set(false);
        assert!(button.is_ready());
    }
}
