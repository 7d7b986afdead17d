//! 4-digit 7-segment display driver

mod sevenseg;

pub use sevenseg::SevenSeg;
