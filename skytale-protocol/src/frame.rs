//! Frame encoding and decoding for the radio link.
//!
//! A frame is always exactly [`TRANSFER_SIZE`] bytes on the air: a 16-byte
//! block followed by zero padding. The radio delivers whole frames only;
//! there is no partial-frame path.

/// Cipher block length in bytes (128-bit blocks)
pub const BLOCK_LEN: usize = 16;

/// Fixed on-air frame size in bytes
pub const TRANSFER_SIZE: usize = 32;

/// A 16-byte plaintext or ciphertext block
pub type Block = [u8; BLOCK_LEN];

/// Errors that can occur during frame construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Source data exceeds the fixed frame size
    Oversize,
}

/// The unit exchanged over the radio transport
///
/// Always exactly [`TRANSFER_SIZE`] bytes. Construction from shorter data
/// zero-pads; construction from longer data is refused rather than
/// silently truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; TRANSFER_SIZE],
}

impl Frame {
    /// Create a frame from a full raw buffer (receive path)
    pub const fn from_bytes(bytes: [u8; TRANSFER_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create a frame carrying one block, zero-padded to the frame size
    pub fn from_block(block: &Block) -> Self {
        let mut bytes = [0u8; TRANSFER_SIZE];
        bytes[..BLOCK_LEN].copy_from_slice(block);
        Self { bytes }
    }

    /// Create a frame from arbitrary data of at most the frame size
    pub fn from_slice(data: &[u8]) -> Result<Self, FrameError> {
        if data.len() > TRANSFER_SIZE {
            return Err(FrameError::Oversize);
        }
        let mut bytes = [0u8; TRANSFER_SIZE];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self { bytes })
    }

    /// Raw frame contents
    pub fn as_bytes(&self) -> &[u8; TRANSFER_SIZE] {
        &self.bytes
    }

    /// The block carried in the leading 16 bytes
    pub fn block(&self) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&self.bytes[..BLOCK_LEN]);
        block
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            bytes: [0u8; TRANSFER_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_round_trip_through_frame() {
        let block: Block = [
            0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E,
            0x4F, 0x50,
        ];
        let frame = Frame::from_block(&block);
        assert_eq!(frame.block(), block);
        // Padding is zeroed
        assert!(frame.as_bytes()[BLOCK_LEN..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_slice_pads_short_data() {
        let frame = Frame::from_slice(b"1234").unwrap();
        assert_eq!(&frame.as_bytes()[..4], b"1234");
        assert!(frame.as_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_slice_rejects_oversize() {
        let data = [0xAAu8; TRANSFER_SIZE + 1];
        assert_eq!(Frame::from_slice(&data), Err(FrameError::Oversize));
    }

    #[test]
    fn test_frame_is_size_preserving() {
        let frame = Frame::from_slice(&[]).unwrap();
        assert_eq!(frame.as_bytes().len(), TRANSFER_SIZE);
    }
}
