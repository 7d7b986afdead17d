//! Link configuration shared by both ends of the point-to-point radio.

use crate::frame::TRANSFER_SIZE;

/// Logical address width in bytes
pub const ADDRESS_WIDTH: usize = 5;

/// Radio link configuration
///
/// Applied once at startup; the link is not reconfigured at runtime.
/// Both nodes must agree on addresses, data rate and transfer size or
/// frames are silently lost, which the rest of the system already
/// tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioConfig {
    /// Transmit-path logical address
    pub tx_address: [u8; ADDRESS_WIDTH],
    /// Receive-path logical address
    pub rx_address: [u8; ADDRESS_WIDTH],
    /// Air data rate in kbps (250, 1000 or 2000 for the nRF24L01+)
    pub air_data_rate_kbps: u16,
    /// Fixed payload width in bytes (at most 32)
    pub transfer_size: u8,
    /// RF output power in dBm
    pub output_power_dbm: i8,
}

/// Shared point-to-point address used by both nodes for both paths
pub const LINK_ADDRESS: [u8; ADDRESS_WIDTH] = [0x01, 0xF2, 0x26, 0x76, 0xD9];

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            tx_address: LINK_ADDRESS,
            rx_address: LINK_ADDRESS,
            air_data_rate_kbps: 2000,
            transfer_size: TRANSFER_SIZE as u8,
            output_power_dbm: 0,
        }
    }
}

impl RadioConfig {
    /// Link configuration with a node-specific output power
    pub fn with_output_power(power_dbm: i8) -> Self {
        Self {
            output_power_dbm: power_dbm,
            ..Self::default()
        }
    }
}
