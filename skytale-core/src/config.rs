//! Compiled-in configuration
//!
//! There is no persistent storage and no runtime reconfiguration: every
//! tunable of both nodes lives here as a constant. Link-level settings
//! (addresses, data rate, transfer size) live in
//! [`skytale_protocol::RadioConfig`].

use skytale_protocol::Block;

use crate::cipher::XorCipher;

/// The cipher strategy used by BOTH ends of the link
///
/// Exactly one strategy is selected at configuration time; the XOR and
/// AES constructions are not interoperable and must never be mixed
/// across the link. Swapping this alias to
/// [`crate::cipher::Aes128Cipher`] re-keys the link onto the AES
/// construction, including the bootstrap self-test seeds in
/// [`crate::present::selftest`].
pub type LinkCipher = XorCipher;

/// Fixed plaintext payload encrypted and transmitted each cycle
pub const PAYLOAD_BLOCK: Block = *b"ABCDEFGHIJKLMNOP";

/// UID of the badge enrolled with the panel
///
/// The panel derives its receive key from this UID plus its own DIP
/// nibble, with the same derivation the beacon applies to a scanned
/// badge. Matching DIP settings on both nodes are part of the shared
/// secret.
pub const ENROLLED_TOKEN: [u8; 4] = [0x5C, 0xE2, 0x96, 0x3F];

/// Acquisition loop poll interval in milliseconds
pub const ACQUIRE_POLL_MS: u64 = 100;

/// Gate button poll interval while the panel is held not-ready
pub const GATE_POLL_MS: u64 = 50;

/// Consecutive identical samples before the gate level is accepted
pub const GATE_DEBOUNCE_SAMPLES: u8 = 3;

/// Radio output power for the beacon node in dBm
pub const BEACON_OUTPUT_POWER_DBM: i8 = -6;

/// Radio output power for the panel node in dBm
pub const PANEL_OUTPUT_POWER_DBM: i8 = 0;

/// Message scrolled across the 4-digit display
pub const SCROLL_MESSAGE: &str = "LAT 37.7749 N - LON 122.4194 E";

/// Fixed pointing coordinates driven to the servos every pass
pub const POINT_LATITUDE: f32 = 37.7749;
pub const POINT_LONGITUDE: f32 = -122.4194;

/// Input ranges for the servo coordinate mapping
pub const LATITUDE_RANGE: (f32, f32) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f32, f32) = (-180.0, 180.0);

/// Servo pulse-width band in microseconds
pub const SERVO_MIN_PULSE_US: f32 = 1000.0;
pub const SERVO_MAX_PULSE_US: f32 = 2000.0;

/// Pulse width driven at startup before any coordinates are shown
pub const SERVO_NEUTRAL_PULSE_US: u16 = 1500;

/// Dwell time per digit during one multiplex round, in milliseconds
pub const DIGIT_DWELL_MS: u32 = 1;

/// Multiplex rounds per scroll window (persistence-of-vision hold)
pub const SCROLL_HOLD_ROUNDS: u32 = 100;

/// Gap between scroll windows in microseconds
pub const SCROLL_STEP_GAP_US: u32 = 200;

/// Buzzer pulse duration per presentation pass, in milliseconds
pub const BUZZER_PULSE_MS: u32 = 1000;
