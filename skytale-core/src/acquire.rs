//! Acquisition loop (transmit side)
//!
//! One bounded pass per call: poll the radio receive path
//! opportunistically, poll the token reader, and on a new token run the
//! full cycle - derive, encrypt, send, self-check - returning to idle
//! regardless of outcome. The firmware calls [`AcquisitionLoop::poll`]
//! on a fixed cadence to bound CPU and radio duty cycle.

use core::marker::PhantomData;

use skytale_protocol::{Block, Frame};

use crate::cipher::BlockCipher;
use crate::kdf::{self, Key};
use crate::state::{Event, State};
use crate::traits::{ConfigSwitches, RadioError, RadioTransport, TokenError, TokenReader};

/// Errors surfaced by an acquisition pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquireError {
    /// Token reader fault
    Token(TokenError),
    /// Radio peripheral fault
    Radio(RadioError),
    /// Decrypt-after-encrypt round trip disagreed with the payload
    ///
    /// This indicates a cipher-engine defect and is fatal; it is never
    /// silently ignored.
    SelfCheckMismatch,
}

impl From<TokenError> for AcquireError {
    fn from(err: TokenError) -> Self {
        Self::Token(err)
    }
}

impl From<RadioError> for AcquireError {
    fn from(err: RadioError) -> Self {
        Self::Radio(err)
    }
}

/// Outcome of one acquisition pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PassReport {
    /// A token was presented and a frame was transmitted
    pub sent: bool,
    /// Frame picked up on the opportunistic receive poll, if any
    pub received: Option<Frame>,
    /// Config nibble sampled for this cycle (for diagnostics; the key
    /// itself is never exposed)
    pub config_bits: Option<u8>,
}

impl PassReport {
    const fn idle(received: Option<Frame>) -> Self {
        Self {
            sent: false,
            received,
            config_bits: None,
        }
    }
}

/// Transmit-side acquisition loop
///
/// Generic over the cipher strategy; both ends of the link must use the
/// same one (see [`crate::config::LinkCipher`]).
pub struct AcquisitionLoop<C: BlockCipher + From<Key>> {
    state: State,
    payload: Block,
    _cipher: PhantomData<C>,
}

impl<C: BlockCipher + From<Key>> AcquisitionLoop<C> {
    /// Create a loop that transmits the given payload block each cycle
    pub const fn new(payload: Block) -> Self {
        Self {
            state: State::Idle,
            payload,
            _cipher: PhantomData,
        }
    }

    /// Current cycle state (always `Idle` between `poll` calls)
    pub fn state(&self) -> State {
        self.state
    }

    /// Run one acquisition pass
    ///
    /// The DIP lines are sampled at the moment of key derivation, and the
    /// key lives only for the encrypt/self-check calls of this pass.
    pub fn poll<R, S, T>(
        &mut self,
        reader: &mut R,
        switches: &mut S,
        radio: &mut T,
    ) -> Result<PassReport, AcquireError>
    where
        R: TokenReader,
        S: ConfigSwitches,
        T: RadioTransport,
    {
        // Receive path first, so inbound frames are drained even while
        // no token is present.
        let received = radio.poll_receive()?;

        let token = match reader.try_read_token()? {
            Some(token) => token,
            None => return Ok(PassReport::idle(received)),
        };
        self.state = self.state.transition(Event::TokenPresented);

        let config = switches.read_nibble();
        let key = kdf::derive(&token, config);
        drop(token);
        self.state = self.state.transition(Event::KeyReady);

        let cipher = C::from(key);
        let mut block = self.payload;
        cipher.encrypt(&mut block);
        self.state = self.state.transition(Event::BlockEncrypted);

        if let Err(err) = radio.send(&Frame::from_block(&block)) {
            // The cycle always ends in idle, even on a radio fault
            self.state = State::Idle;
            return Err(err.into());
        }
        self.state = self.state.transition(Event::FrameSent);

        // Round-trip verification before the cycle closes
        cipher.decrypt(&mut block);
        self.state = self.state.transition(Event::CycleComplete);
        if block != self.payload {
            return Err(AcquireError::SelfCheckMismatch);
        }

        Ok(PassReport {
            sent: true,
            received,
            config_bits: Some(config.value()),
        })
    }
}
