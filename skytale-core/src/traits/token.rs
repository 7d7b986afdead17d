//! Token reader trait

use heapless::Vec;

pub use crate::kdf::MAX_TOKEN_LEN;

/// An identity token captured once per presentation event
///
/// Owned exclusively by the acquisition cycle that read it and discarded
/// after key derivation.
pub type IdentityToken = Vec<u8, MAX_TOKEN_LEN>;

/// Errors that can occur while talking to the token reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenError {
    /// Bus-level communication failure
    Bus,
    /// The tag answered but the exchange did not complete cleanly
    Protocol,
}

/// Trait for polled token readers
///
/// `try_read_token` is non-blocking and idempotent across calls while no
/// new token is present: absence is `Ok(None)`, not an error.
pub trait TokenReader {
    /// Poll for a newly presented token
    fn try_read_token(&mut self) -> Result<Option<IdentityToken>, TokenError>;
}
