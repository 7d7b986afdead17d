//! Time-division multiplexed 7-segment driver
//!
//! The display is a common-line 4-digit module with both segment and
//! digit-common lines active-low. Only one digit's common line is ever
//! active at an instant; the segment pattern for a digit is asserted
//! before its common line is enabled and cleared before the next digit's
//! line is enabled, so adjacent digits never ghost.

use embedded_hal::delay::DelayNs;

use skytale_core::config::{DIGIT_DWELL_MS, SCROLL_HOLD_ROUNDS};
use skytale_core::display::{glyph, DisplayFrame, SegmentPattern, DISPLAY_DIGITS};
use skytale_hal::OutputPin;

/// Number of segment lines (a through g)
const SEGMENT_LINES: usize = 7;

/// 4-digit 7-segment display over plain GPIO lines
pub struct SevenSeg<O: OutputPin> {
    segments: [O; SEGMENT_LINES],
    digits: [O; DISPLAY_DIGITS],
}

impl<O: OutputPin> SevenSeg<O> {
    /// Take ownership of the segment lines (a..g) and digit common lines
    ///
    /// The display starts fully blanked.
    pub fn new(segments: [O; SEGMENT_LINES], digits: [O; DISPLAY_DIGITS]) -> Self {
        let mut display = Self { segments, digits };
        display.clear_all();
        display
    }

    /// Turn off every digit and every segment (active-low: all high)
    ///
    /// Commons drop first so segment lines never change under an
    /// enabled digit.
    pub fn clear_all(&mut self) {
        for digit in &mut self.digits {
            digit.set_high();
        }
        for seg in &mut self.segments {
            seg.set_high();
        }
    }

    /// Assert a segment pattern (lit segments driven low)
    pub fn set_segments(&mut self, pattern: SegmentPattern) {
        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.set_state(!pattern.is_lit(i));
        }
    }

    /// Enable one digit's common line (0 = leftmost)
    ///
    /// Out-of-range indices are ignored.
    pub fn enable_digit(&mut self, index: usize) {
        if let Some(digit) = self.digits.get_mut(index) {
            digit.set_low();
        }
    }

    /// Show one character on one digit: blank, assert segments, enable
    pub fn show_digit(&mut self, index: usize, ch: u8) {
        self.clear_all();
        self.set_segments(glyph(ch));
        self.enable_digit(index);
    }

    /// One multiplex round: each digit lit for its dwell time, then blank
    pub fn multiplex_round(&mut self, frame: &DisplayFrame, delay: &mut impl DelayNs) {
        for (index, ch) in frame.chars().into_iter().enumerate() {
            self.show_digit(index, ch);
            delay.delay_ms(DIGIT_DWELL_MS);
        }
        self.clear_all();
    }

    /// Hold one window on the display long enough for persistence of vision
    pub fn show_window(&mut self, frame: &DisplayFrame, delay: &mut impl DelayNs) {
        for _ in 0..SCROLL_HOLD_ROUNDS {
            self.multiplex_round(frame, delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    /// Pin transition log shared by all recording pins of one display
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Segment(usize),
        Digit(usize),
    }

    type Log = RefCell<Vec<(Line, bool), 2048>>;

    struct RecordingPin<'a> {
        line: Line,
        high: bool,
        log: &'a Log,
    }

    impl<'a> RecordingPin<'a> {
        fn new(line: Line, log: &'a Log) -> Self {
            Self {
                line,
                high: true,
                log,
            }
        }
    }

    impl OutputPin for RecordingPin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push((self.line, true)).unwrap();
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push((self.line, false)).unwrap();
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn display(log: &Log) -> SevenSeg<RecordingPin<'_>> {
        let segments = core::array::from_fn(|i| RecordingPin::new(Line::Segment(i), log));
        let digits = core::array::from_fn(|i| RecordingPin::new(Line::Digit(i), log));
        SevenSeg::new(segments, digits)
    }

    #[test]
    fn test_at_most_one_digit_active_at_any_instant() {
        let log = Log::default();
        let mut display = display(&log);
        let mut delay = NoDelay;

        display.multiplex_round(&DisplayFrame::new(*b"1234"), &mut delay);

        // Replay the transition log, tracking every digit common line
        let mut active = [false; DISPLAY_DIGITS];
        for &(line, high) in log.borrow().iter() {
            if let Line::Digit(i) = line {
                active[i] = !high;
            }
            let count = active.iter().filter(|&&a| a).count();
            assert!(count <= 1, "{count} digit lines active at once");
        }
    }

    #[test]
    fn test_segments_settle_before_digit_enables() {
        let log = Log::default();
        let mut display = display(&log);
        let mut delay = NoDelay;

        display.multiplex_round(&DisplayFrame::new(*b"88  "), &mut delay);

        // While a digit common line is low, no segment line may change
        let mut digit_active = false;
        for &(line, high) in log.borrow().iter() {
            match line {
                Line::Digit(_) => digit_active = !high,
                Line::Segment(_) => {
                    assert!(!digit_active, "segment changed while a digit was enabled");
                }
            }
        }
    }

    #[test]
    fn test_round_ends_blanked() {
        let log = Log::default();
        let mut display = display(&log);
        let mut delay = NoDelay;

        display.multiplex_round(&DisplayFrame::new(*b"7011"), &mut delay);

        assert!(display.segments.iter().all(|pin| pin.is_set_high()));
        assert!(display.digits.iter().all(|pin| pin.is_set_high()));
    }
}
