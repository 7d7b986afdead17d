//! Presentation scheduling
//!
//! The panel multiplexes three output concerns from one cooperative
//! loop: the scrolling message on the 4-digit display, the pointing
//! servos, and the buzzer. [`Presenter`] owns the pure scheduling state;
//! the firmware applies each [`PresentationPass`] to the drivers and
//! supplies the fixed-duration pauses, so the logic here never blocks
//! and is fully host-testable.

pub mod debounce;
pub mod scroll;
pub mod selftest;
pub mod servo;

pub use debounce::Debouncer;
pub use scroll::Scroller;
pub use selftest::{SelfTestError, SEED_CIPHERTEXT, SEED_KEY};
pub use servo::{map_to_pulse_width, ServoPulses};

use skytale_protocol::Frame;

use crate::cipher::BlockCipher;
use crate::display::DisplayFrame;

/// One pass of presentation output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresentationPass {
    /// Window to multiplex onto the display for this step
    pub window: DisplayFrame,
    /// Servo pulse widths, recomputed every pass
    pub servos: ServoPulses,
}

/// Presentation scheduler state
///
/// Radio updates take priority over the scroll animation: the digits
/// decoded from the most recent frame occupy the next display slot, after
/// which the scroll resumes where it left off.
#[derive(Debug, Clone)]
pub struct Presenter {
    scroller: Scroller,
    pending_digits: Option<DisplayFrame>,
    latitude: f32,
    longitude: f32,
}

impl Presenter {
    /// Create a presenter for a fixed message and coordinate pair
    pub fn new(message: &'static str, latitude: f32, longitude: f32) -> Self {
        Self {
            scroller: Scroller::new(message),
            pending_digits: None,
            latitude,
            longitude,
        }
    }

    /// Decrypt a received frame and queue its digits for display
    ///
    /// Returns the decoded digits. Non-numeric bytes in the decrypted
    /// block map to the placeholder digit by policy.
    pub fn ingest(&mut self, cipher: &impl BlockCipher, frame: &Frame) -> DisplayFrame {
        let mut block = frame.block();
        cipher.decrypt(&mut block);

        let digits = DisplayFrame::from_ascii_digits(&block);
        self.pending_digits = Some(digits);
        digits
    }

    /// Advance one scheduling step and produce this pass's output
    pub fn tick(&mut self) -> PresentationPass {
        let window = match self.pending_digits.take() {
            Some(digits) => digits,
            None => match self.scroller.next_window() {
                Some(window) => window,
                None => {
                    self.scroller.restart();
                    // A sweep always has at least DISPLAY_DIGITS windows
                    self.scroller.next_window().unwrap_or(DisplayFrame::BLANK)
                }
            },
        };

        PresentationPass {
            window,
            servos: ServoPulses::from_coordinates(self.latitude, self.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::XorCipher;
    use skytale_protocol::Frame;

    fn presenter() -> Presenter {
        Presenter::new("AB", 0.0, 0.0)
    }

    #[test]
    fn test_scroll_resumes_after_radio_update() {
        let mut p = presenter();
        assert_eq!(p.tick().window, DisplayFrame::new(*b"AB  "));

        // Frame arrives: its digits take the next slot
        let cipher = XorCipher::from([0u8; 16]);
        let frame = Frame::from_slice(b"4213").unwrap();
        p.ingest(&cipher, &frame);
        assert_eq!(p.tick().window, DisplayFrame::new(*b"4213"));

        // Scroll picks up where it left off
        assert_eq!(p.tick().window, DisplayFrame::new(*b"B   "));
    }

    #[test]
    fn test_ingest_decrypts_before_decoding() {
        let mut p = presenter();
        let key = [0x01u8; 16];
        let cipher = XorCipher::from(key);

        // "97" encrypted under the XOR key
        let mut block = [0u8; 16];
        block[0] = b'9' ^ 0x01;
        block[1] = b'7' ^ 0x01;
        let frame = Frame::from_block(&block);

        let digits = p.ingest(&cipher, &frame);
        assert_eq!(digits.chars()[0], b'9');
        assert_eq!(digits.chars()[1], b'7');
    }

    #[test]
    fn test_scroll_wraps_around() {
        let mut p = presenter();
        // Drain one full sweep (len + 4 windows)
        for _ in 0..6 {
            p.tick();
        }
        // Next pass restarts the sweep
        assert_eq!(p.tick().window, DisplayFrame::new(*b"AB  "));
    }

    #[test]
    fn test_servos_driven_every_pass() {
        let mut p = Presenter::new("AB", 90.0, 180.0);
        let pass = p.tick();
        assert_eq!(pass.servos.lat_us, 2000);
        assert_eq!(pass.servos.lon_us, 2000);
    }
}
