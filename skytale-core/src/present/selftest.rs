//! Bootstrap decrypt self-test
//!
//! Before the panel enters its main loop it decrypts a pre-seeded
//! ciphertext block under a pre-seeded key and checks the result. This is
//! a diagnostic path only - it proves the cipher engine end of the panel
//! works before any radio traffic is trusted. It is kept separate from
//! the receive path on purpose.
//!
//! The seed constants are valid for the configured
//! [`crate::config::LinkCipher`]; re-derive them if the link strategy
//! changes.

use crate::cipher::{Block, BlockCipher};
use crate::kdf::Key;

/// Key the seed block was encrypted under
pub const SEED_KEY: Key = *b"ABCDEFGHIJKLMNOP";

/// Pre-seeded ciphertext block
pub const SEED_CIPHERTEXT: Block = [
    0x1D, 0xA0, 0xD5, 0x7B, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F,
    0x56,
];

/// Plaintext the seed block must decrypt to
pub const SEED_PLAINTEXT: Block = [
    0x5C, 0xE2, 0x96, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x06,
];

/// Self-test failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTestError {
    /// The seed block did not decrypt to the expected plaintext
    Mismatch {
        /// What the cipher produced instead
        got: Block,
    },
}

/// Decrypt the seed block and verify it
///
/// `cipher` must be the link cipher constructed from [`SEED_KEY`].
/// Returns the decrypted block for display/logging on success.
pub fn run(cipher: &impl BlockCipher) -> Result<Block, SelfTestError> {
    let mut block = SEED_CIPHERTEXT;
    cipher.decrypt(&mut block);

    if block == SEED_PLAINTEXT {
        Ok(block)
    } else {
        Err(SelfTestError::Mismatch { got: block })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkCipher;

    #[test]
    fn test_seed_block_decrypts_to_expected_plaintext() {
        let cipher = LinkCipher::from(SEED_KEY);
        assert_eq!(run(&cipher), Ok(SEED_PLAINTEXT));
    }

    #[test]
    fn test_wrong_key_is_reported() {
        let cipher = LinkCipher::from([0x55u8; 16]);
        assert!(matches!(run(&cipher), Err(SelfTestError::Mismatch { .. })));
    }
}
