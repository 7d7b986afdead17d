//! RP2040 implementations of the Skytale HAL traits
//!
//! Thin wrappers over embassy-rp peripherals:
//!
//! - [`gpio::OutputLine`], [`gpio::InputLine`] - digital I/O
//! - [`spi::SpiPort`] - blocking SPI master
//! - [`pwm::ServoPwm`] - 50 Hz servo pulse output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod spi;

pub use gpio::{InputLine, OutputLine};
pub use pwm::ServoPwm;
pub use spi::SpiPort;
