//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The token reader returned a new token
    TokenPresented,
    /// Key derivation finished (always succeeds)
    KeyReady,
    /// The payload block was encrypted under the derived key
    BlockEncrypted,
    /// The frame was handed to the radio transport
    FrameSent,
    /// Round-trip self-check done, cycle over
    CycleComplete,
}
