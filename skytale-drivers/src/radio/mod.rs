//! Radio transport drivers

mod nrf24;

pub use nrf24::Nrf24;
