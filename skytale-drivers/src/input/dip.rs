//! 4-line DIP switch bank

use skytale_core::kdf::ConfigNibble;
use skytale_core::traits::ConfigSwitches;
use skytale_hal::InputPin;

/// DIP switch bank on 4 input lines
///
/// Line 1 is the most significant bit of the nibble.
pub struct DipSwitches<I: InputPin> {
    lines: [I; 4],
}

impl<I: InputPin> DipSwitches<I> {
    /// Take ownership of the 4 switch lines, most significant first
    pub fn new(lines: [I; 4]) -> Self {
        Self { lines }
    }
}

impl<I: InputPin> ConfigSwitches for DipSwitches<I> {
    fn read_nibble(&mut self) -> ConfigNibble {
        ConfigNibble::from_lines(
            self.lines[0].is_high(),
            self.lines[1].is_high(),
            self.lines[2].is_high(),
            self.lines[3].is_high(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_line_order_is_msb_first() {
        let mut dip = DipSwitches::new([
            FixedPin(false),
            FixedPin(true),
            FixedPin(true),
            FixedPin(false),
        ]);
        assert_eq!(dip.read_nibble().value(), 0b0110);
    }
}
