//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in skytale-core for the hardware on both nodes:
//!
//! - 4-digit 7-segment display with time-division multiplexing
//! - DIP switch bank and debounced gate button
//! - Actuators (pointing servos, buzzer)
//! - nRF24L01+ radio transport
//! - MFRC522 token reader

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod input;
pub mod radio;
pub mod token;
