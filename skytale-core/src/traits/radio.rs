//! Radio transport trait

use skytale_protocol::{Frame, RadioConfig};

/// Errors that can occur while driving the radio peripheral
///
/// These are bus/peripheral faults. Frame loss is NOT an error: the link
/// is fire-and-forget and loss is silently possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// SPI bus failure
    Bus,
    /// Operation attempted before `configure`
    NotConfigured,
}

/// Trait for the fixed-frame, best-effort radio link
///
/// No delivery guarantee, no retransmission, no ordering across sends.
/// Callers must tolerate loss; in particular the presentation loop must
/// never block waiting for a frame that never arrives.
pub trait RadioTransport {
    /// Apply the link configuration (once, at startup)
    fn configure(&mut self, config: &RadioConfig) -> Result<(), RadioError>;

    /// Transmit one frame, fire-and-forget
    fn send(&mut self, frame: &Frame) -> Result<(), RadioError>;

    /// Poll for a received frame
    ///
    /// Returns immediately with `Ok(Some(frame))` for a complete frame or
    /// `Ok(None)` when nothing is available; there is no partial-frame
    /// delivery.
    fn poll_receive(&mut self) -> Result<Option<Frame>, RadioError>;
}
