//! MFRC522 proximity token reader
//!
//! Polled driver: each `try_read_token` call issues one REQA. Only tags
//! in the idle state answer a REQA, so a tag left on the reader reports
//! once and stays quiet until it leaves the field - which gives the
//! "new token" semantics the acquisition loop wants without any
//! bookkeeping here. Single-size (4-byte) UIDs are read via cascade
//! level 1 anticollision; longer UIDs would need the full select
//! cascade.

use skytale_core::traits::{IdentityToken, TokenError, TokenReader};
use skytale_hal::{OutputPin, SpiBus};

// Register map (datasheet section 9)
const COMMAND_REG: u8 = 0x01;
const COM_IRQ_REG: u8 = 0x04;
const ERROR_REG: u8 = 0x06;
const FIFO_DATA_REG: u8 = 0x09;
const FIFO_LEVEL_REG: u8 = 0x0A;
const BIT_FRAMING_REG: u8 = 0x0D;
const MODE_REG: u8 = 0x11;
const TX_CONTROL_REG: u8 = 0x14;
const TX_ASK_REG: u8 = 0x15;
const T_MODE_REG: u8 = 0x2A;
const T_PRESCALER_REG: u8 = 0x2B;
const T_RELOAD_REG_H: u8 = 0x2C;
const T_RELOAD_REG_L: u8 = 0x2D;

// Commands
const CMD_IDLE: u8 = 0x00;
const CMD_TRANSCEIVE: u8 = 0x0C;
const CMD_SOFT_RESET: u8 = 0x0F;

// PICC commands
const PICC_REQA: u8 = 0x26;
const PICC_ANTICOLL_CL1: u8 = 0x93;

// ComIrqReg bits
const IRQ_RX: u8 = 0x20;
const IRQ_IDLE: u8 = 0x10;
const IRQ_TIMER: u8 = 0x01;

// ErrorReg bits: protocol, parity, buffer overflow
const ERROR_MASK: u8 = 0x13;

/// Iteration bound while waiting for a transceive to complete
const IRQ_POLL_LIMIT: u32 = 2000;

/// MFRC522 over SPI with a dedicated chip-select line
pub struct Mfrc522<S: SpiBus, O: OutputPin> {
    spi: S,
    csn: O,
}

impl<S: SpiBus, O: OutputPin> Mfrc522<S, O> {
    /// Take ownership of the bus and chip select, resetting the chip
    /// and enabling the antenna
    pub fn new(spi: S, mut csn: O) -> Result<Self, TokenError> {
        csn.set_high();
        let mut reader = Self { spi, csn };
        reader.init()?;
        Ok(reader)
    }

    fn init(&mut self) -> Result<(), TokenError> {
        self.write_register(COMMAND_REG, CMD_SOFT_RESET)?;

        // 10 ms timeout timer: f_timer = 13.56 MHz / (2 * prescaler + 1)
        self.write_register(T_MODE_REG, 0x80)?;
        self.write_register(T_PRESCALER_REG, 0xA9)?;
        self.write_register(T_RELOAD_REG_H, 0x03)?;
        self.write_register(T_RELOAD_REG_L, 0xE8)?;

        self.write_register(TX_ASK_REG, 0x40)?; // force 100% ASK
        self.write_register(MODE_REG, 0x3D)?; // CRC preset 0x6363

        // Antenna on
        let tx_control = self.read_register(TX_CONTROL_REG)?;
        if tx_control & 0x03 != 0x03 {
            self.write_register(TX_CONTROL_REG, tx_control | 0x03)?;
        }
        Ok(())
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), TokenError> {
        self.csn.set_low();
        let result = self.spi.write(&[(reg << 1) & 0x7E, value]);
        self.csn.set_high();
        result.map_err(|_| TokenError::Bus)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, TokenError> {
        self.csn.set_low();
        let mut buf = [0u8; 2];
        let result = self.spi.transfer(&mut buf, &[0x80 | (reg << 1), 0x00]);
        self.csn.set_high();
        result.map_err(|_| TokenError::Bus)?;
        Ok(buf[1])
    }

    /// Run one transceive exchange
    ///
    /// `framing_bits` is the number of valid bits in the last transmitted
    /// byte (0 = all 8). Returns the number of bytes read into `rx`, or
    /// `None` when no tag answered before the timeout.
    fn transceive(
        &mut self,
        data: &[u8],
        framing_bits: u8,
        rx: &mut [u8],
    ) -> Result<Option<usize>, TokenError> {
        self.write_register(COMMAND_REG, CMD_IDLE)?;
        self.write_register(COM_IRQ_REG, 0x7F)?; // clear all IRQ flags
        self.write_register(FIFO_LEVEL_REG, 0x80)?; // flush FIFO

        for &byte in data {
            self.write_register(FIFO_DATA_REG, byte)?;
        }
        self.write_register(COMMAND_REG, CMD_TRANSCEIVE)?;
        self.write_register(BIT_FRAMING_REG, 0x80 | framing_bits)?; // StartSend

        let mut completed = false;
        for _ in 0..IRQ_POLL_LIMIT {
            let irq = self.read_register(COM_IRQ_REG)?;
            if irq & (IRQ_RX | IRQ_IDLE) != 0 {
                completed = true;
                break;
            }
            if irq & IRQ_TIMER != 0 {
                // Timer ran out: no tag in the field
                return Ok(None);
            }
        }
        if !completed {
            return Ok(None);
        }

        if self.read_register(ERROR_REG)? & ERROR_MASK != 0 {
            return Err(TokenError::Protocol);
        }

        let level = self.read_register(FIFO_LEVEL_REG)? as usize;
        let count = level.min(rx.len());
        for slot in rx.iter_mut().take(count) {
            *slot = self.read_register(FIFO_DATA_REG)?;
        }
        Ok(Some(count))
    }
}

impl<S: SpiBus, O: OutputPin> TokenReader for Mfrc522<S, O> {
    fn try_read_token(&mut self) -> Result<Option<IdentityToken>, TokenError> {
        // REQA is a short frame: 7 valid bits
        let mut atqa = [0u8; 2];
        match self.transceive(&[PICC_REQA], 0x07, &mut atqa)? {
            Some(2) => {}
            Some(_) => return Err(TokenError::Protocol),
            None => return Ok(None),
        }

        // Cascade level 1 anticollision: 4 UID bytes + BCC
        let mut uid = [0u8; 5];
        match self.transceive(&[PICC_ANTICOLL_CL1, 0x20], 0x00, &mut uid)? {
            Some(5) => {}
            _ => return Err(TokenError::Protocol),
        }

        let bcc = uid[0] ^ uid[1] ^ uid[2] ^ uid[3];
        if bcc != uid[4] {
            return Err(TokenError::Protocol);
        }

        // Infallible: 4 bytes always fit in an IdentityToken
        Ok(IdentityToken::from_slice(&uid[..4]).ok())
    }
}
