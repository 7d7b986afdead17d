//! DIP switch bank trait

use crate::kdf::ConfigNibble;

/// Trait for the 4-line DIP switch bank
///
/// The nibble is sampled at the moment of key derivation and never
/// persisted; every cycle re-samples the physical lines.
pub trait ConfigSwitches {
    /// Sample all 4 lines, most-significant bit first
    fn read_nibble(&mut self) -> ConfigNibble;
}
