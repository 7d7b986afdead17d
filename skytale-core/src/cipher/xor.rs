//! Stream-style toggle cipher: XOR with the key

use super::{Block, BlockCipher};
use crate::kdf::Key;

/// Byte-wise XOR of the block with the key
///
/// The transform is self-inverse, so encrypt and decrypt are the same
/// operation.
#[derive(Clone)]
pub struct XorCipher {
    key: Key,
}

impl From<Key> for XorCipher {
    fn from(key: Key) -> Self {
        Self { key }
    }
}

impl BlockCipher for XorCipher {
    fn encrypt(&self, block: &mut Block) {
        for (b, k) in block.iter_mut().zip(self.key.iter()) {
            *b ^= k;
        }
    }

    fn decrypt(&self, block: &mut Block) {
        self.encrypt(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ciphertext_first_byte() {
        // Token 5C E2 96 3F, config 0110, payload block 41..50:
        // byte 0 of the ciphertext is 0x41 ^ 0x5C = 0x1D.
        let key = crate::kdf::derive(
            &[0x5C, 0xE2, 0x96, 0x3F],
            crate::kdf::ConfigNibble::new(0b0110),
        );
        let cipher = XorCipher::from(key);

        let mut block: Block = *b"ABCDEFGHIJKLMNOP";
        cipher.encrypt(&mut block);

        assert_eq!(block[0], 0x1D);
    }

    #[test]
    fn test_zero_key_is_identity() {
        let cipher = XorCipher::from([0u8; 16]);
        let mut block: Block = *b"ABCDEFGHIJKLMNOP";
        cipher.encrypt(&mut block);
        assert_eq!(&block, b"ABCDEFGHIJKLMNOP");
    }
}
