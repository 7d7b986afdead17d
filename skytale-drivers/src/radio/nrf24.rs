//! nRF24L01+ radio transport
//!
//! Register-level driver for the link's only radio. The chip idles in
//! receive mode; `send` drops to standby, flips to transmit, pulses CE
//! and returns to receive, so a node is always either sending or
//! receiving, never both. Auto-acknowledgment and retransmission stay
//! disabled: the link is fire-and-forget by design.

use embedded_hal::delay::DelayNs;

use skytale_core::traits::{RadioError, RadioTransport};
use skytale_hal::{OutputPin, SpiBus};
use skytale_protocol::{Frame, RadioConfig, TRANSFER_SIZE};

// Register map
const CONFIG: u8 = 0x00;
const EN_AA: u8 = 0x01;
const EN_RXADDR: u8 = 0x02;
const SETUP_AW: u8 = 0x03;
const SETUP_RETR: u8 = 0x04;
const RF_SETUP: u8 = 0x06;
const STATUS: u8 = 0x07;
const RX_ADDR_P0: u8 = 0x0A;
const TX_ADDR: u8 = 0x10;
const RX_PW_P0: u8 = 0x11;

// Commands
const W_REGISTER: u8 = 0x20;
const R_RX_PAYLOAD: u8 = 0x61;
const W_TX_PAYLOAD: u8 = 0xA0;
const FLUSH_TX: u8 = 0xE1;
const FLUSH_RX: u8 = 0xE2;
const NOP: u8 = 0xFF;

// CONFIG bits
const EN_CRC: u8 = 1 << 3;
const PWR_UP: u8 = 1 << 1;
const PRIM_RX: u8 = 1 << 0;

// STATUS bits
const RX_DR: u8 = 1 << 6;
const TX_DS: u8 = 1 << 5;
const MAX_RT: u8 = 1 << 4;

// RF_SETUP bits
const RF_DR_LOW: u8 = 1 << 5;
const RF_DR_HIGH: u8 = 1 << 3;

/// Iteration bound while waiting for a transmit to drain
const TX_POLL_LIMIT: u32 = 1000;

/// Encode the air data rate and output power into RF_SETUP
fn rf_setup_bits(config: &RadioConfig) -> u8 {
    let rate = match config.air_data_rate_kbps {
        250 => RF_DR_LOW,
        2000 => RF_DR_HIGH,
        _ => 0, // 1000 kbps
    };
    // Output power bits 2:1: -18/-12/-6/0 dBm
    let power: u8 = match config.output_power_dbm {
        p if p >= 0 => 0b11,
        p if p >= -6 => 0b10,
        p if p >= -12 => 0b01,
        _ => 0b00,
    };
    rate | (power << 1)
}

/// nRF24L01+ over SPI with CE and CSN lines
pub struct Nrf24<S: SpiBus, O: OutputPin, D: DelayNs> {
    spi: S,
    csn: O,
    ce: O,
    delay: D,
    configured: bool,
}

impl<S: SpiBus, O: OutputPin, D: DelayNs> Nrf24<S, O, D> {
    /// Take ownership of the bus and control lines
    pub fn new(spi: S, mut csn: O, mut ce: O, delay: D) -> Self {
        csn.set_high();
        ce.set_low();
        Self {
            spi,
            csn,
            ce,
            delay,
            configured: false,
        }
    }

    fn command(&mut self, out: &[u8], input: &mut [u8]) -> Result<u8, RadioError> {
        self.csn.set_low();
        let mut status = [0u8];
        let result = self
            .spi
            .transfer(&mut status, &out[..1])
            .and_then(|()| match (out.len() > 1, input.is_empty()) {
                (true, _) => self.spi.write(&out[1..]),
                (false, false) => self.spi.read(input),
                (false, true) => Ok(()),
            });
        self.csn.set_high();
        result.map_err(|_| RadioError::Bus)?;
        Ok(status[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), RadioError> {
        self.command(&[W_REGISTER | reg, value], &mut [])?;
        Ok(())
    }

    fn write_address(&mut self, reg: u8, address: &[u8; 5]) -> Result<(), RadioError> {
        let mut out = [0u8; 6];
        out[0] = W_REGISTER | reg;
        out[1..].copy_from_slice(address);
        self.command(&out, &mut [])?;
        Ok(())
    }

    fn status(&mut self) -> Result<u8, RadioError> {
        self.command(&[NOP], &mut [])
    }

    fn enter_receive(&mut self) -> Result<(), RadioError> {
        self.write_register(CONFIG, EN_CRC | PWR_UP | PRIM_RX)?;
        self.ce.set_high();
        Ok(())
    }
}

impl<S: SpiBus, O: OutputPin, D: DelayNs> RadioTransport for Nrf24<S, O, D> {
    fn configure(&mut self, config: &RadioConfig) -> Result<(), RadioError> {
        self.ce.set_low();

        // Point-to-point, best effort: no auto-ack, no retransmission
        self.write_register(EN_AA, 0x00)?;
        self.write_register(EN_RXADDR, 0x01)?; // pipe 0 only
        self.write_register(SETUP_AW, 0b11)?; // 5-byte addresses
        self.write_register(SETUP_RETR, 0x00)?;
        self.write_register(RF_SETUP, rf_setup_bits(config))?;
        self.write_address(TX_ADDR, &config.tx_address)?;
        self.write_address(RX_ADDR_P0, &config.rx_address)?;
        self.write_register(RX_PW_P0, config.transfer_size.min(TRANSFER_SIZE as u8))?;

        self.command(&[FLUSH_TX], &mut [])?;
        self.command(&[FLUSH_RX], &mut [])?;
        self.write_register(STATUS, RX_DR | TX_DS | MAX_RT)?;

        // Power up and settle, then idle in receive mode
        self.write_register(CONFIG, EN_CRC | PWR_UP | PRIM_RX)?;
        self.delay.delay_us(1500);
        self.ce.set_high();

        self.configured = true;
        Ok(())
    }

    fn send(&mut self, frame: &Frame) -> Result<(), RadioError> {
        if !self.configured {
            return Err(RadioError::NotConfigured);
        }

        // Drop out of receive and flip to transmit
        self.ce.set_low();
        self.write_register(CONFIG, EN_CRC | PWR_UP)?;

        let mut out = [0u8; 1 + TRANSFER_SIZE];
        out[0] = W_TX_PAYLOAD;
        out[1..].copy_from_slice(frame.as_bytes());
        self.command(&out, &mut [])?;

        // CE pulse (>10 us) clocks the payload out
        self.ce.set_high();
        self.delay.delay_us(15);
        self.ce.set_low();

        // Wait for the FIFO to drain; bounded, the link has no ack to
        // wait on
        for _ in 0..TX_POLL_LIMIT {
            let status = self.status()?;
            if status & (TX_DS | MAX_RT) != 0 {
                break;
            }
            self.delay.delay_us(10);
        }
        self.write_register(STATUS, TX_DS | MAX_RT)?;

        self.enter_receive()
    }

    fn poll_receive(&mut self) -> Result<Option<Frame>, RadioError> {
        if !self.configured {
            return Err(RadioError::NotConfigured);
        }

        if self.status()? & RX_DR == 0 {
            return Ok(None);
        }

        let mut payload = [0u8; TRANSFER_SIZE];
        self.command(&[R_RX_PAYLOAD], &mut payload)?;
        self.write_register(STATUS, RX_DR)?;

        Ok(Some(Frame::from_bytes(payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rf_setup_encoding() {
        let mut config = RadioConfig::default(); // 2000 kbps, 0 dBm
        assert_eq!(rf_setup_bits(&config), RF_DR_HIGH | 0b110);

        config.air_data_rate_kbps = 250;
        config.output_power_dbm = -6;
        assert_eq!(rf_setup_bits(&config), RF_DR_LOW | 0b100);
    }

    struct FakeSpi;

    impl SpiBus for FakeSpi {
        type Error = ();

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), ()> {
            Ok(())
        }

        fn write(&mut self, _data: &[u8]) -> Result<(), ()> {
            Ok(())
        }

        fn read(&mut self, _buf: &mut [u8]) -> Result<(), ()> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _data: &mut [u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    struct FakePin;

    impl OutputPin for FakePin {
        fn set_high(&mut self) {}
        fn set_low(&mut self) {}
        fn is_set_high(&self) -> bool {
            false
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_unconfigured_radio_refuses_traffic() {
        let mut radio = Nrf24::new(FakeSpi, FakePin, FakePin, NoDelay);
        assert_eq!(
            radio.send(&Frame::default()),
            Err(RadioError::NotConfigured)
        );
        assert_eq!(radio.poll_receive(), Err(RadioError::NotConfigured));
    }
}
