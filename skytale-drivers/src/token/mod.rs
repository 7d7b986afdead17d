//! Token reader drivers

mod mfrc522;

pub use mfrc522::Mfrc522;
