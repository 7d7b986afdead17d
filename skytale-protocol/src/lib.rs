//! Skytale Radio Link Protocol
//!
//! This crate defines the over-the-air unit exchanged between the badge
//! reader (beacon) and the display panel, plus the link configuration
//! shared by both ends. The link is deliberately minimal:
//!
//! ```text
//! ┌──────────────────┬──────────────────┐
//! │ BLOCK            │ PADDING          │
//! │ 16B ciphertext   │ 16B zeros        │
//! └──────────────────┴──────────────────┘
//! ```
//!
//! There is no sequence number, checksum or acknowledgment: delivery is
//! fire-and-forget, at-most-once, and frame loss is tolerated by callers.
//! Both nodes use one shared 5-byte logical address for the transmit and
//! receive paths of this point-to-point link.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod link;

pub use frame::{Block, Frame, FrameError, BLOCK_LEN, TRANSFER_SIZE};
pub use link::{RadioConfig, ADDRESS_WIDTH};
