//! AES-128 single-block strategy

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;

use super::{Block, BlockCipher};
use crate::kdf::Key;

/// AES-128 over one 16-byte block
///
/// The key schedule is derived once at construction. Both directions are
/// exposed so either node role can use it when selected as the link
/// strategy.
#[derive(Clone)]
pub struct Aes128Cipher {
    inner: Aes128,
}

impl From<Key> for Aes128Cipher {
    fn from(key: Key) -> Self {
        Self {
            inner: Aes128::new(GenericArray::from_slice(&key)),
        }
    }
}

impl BlockCipher for Aes128Cipher {
    fn encrypt(&self, block: &mut Block) {
        self.inner
            .encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt(&self, block: &mut Block) {
        self.inner
            .decrypt_block(GenericArray::from_mut_slice(block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fips197_vector() {
        // FIPS-197 appendix C.1
        let key: Key = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F,
        ];
        let cipher = Aes128Cipher::from(key);

        let mut block: Block = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD,
            0xEE, 0xFF,
        ];
        cipher.encrypt(&mut block);

        assert_eq!(
            block,
            [
                0x69, 0xC4, 0xE0, 0xD8, 0x6A, 0x7B, 0x04, 0x30, 0xD8, 0xCD, 0xB7, 0x80, 0x70,
                0xB4, 0xC5, 0x5A,
            ]
        );

        cipher.decrypt(&mut block);
        assert_eq!(block[0], 0x00);
        assert_eq!(block[15], 0xFF);
    }
}
