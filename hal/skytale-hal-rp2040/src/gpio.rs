//! RP2040 GPIO wrappers

use embassy_rp::gpio::{Input, Output};

use skytale_hal::gpio;

/// Push-pull output line
pub struct OutputLine<'d> {
    inner: Output<'d>,
}

impl<'d> OutputLine<'d> {
    /// Wrap a configured embassy-rp output
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl gpio::OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Input line (pull configuration chosen at construction)
pub struct InputLine<'d> {
    inner: Input<'d>,
}

impl<'d> InputLine<'d> {
    /// Wrap a configured embassy-rp input
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl gpio::InputPin for InputLine<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}
