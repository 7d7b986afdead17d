//! Skytale beacon - badge reader / transmitter node
//!
//! Polls the MFRC522 for a presented badge; on a new badge, derives the
//! cycle key from the badge UID plus the DIP switch nibble, encrypts the
//! payload block and fires it over the nRF24L01+. The loop runs on a
//! fixed cadence to bound radio and CPU duty cycle, and opportunistically
//! drains the receive path each pass.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use skytale_core::acquire::{AcquireError, AcquisitionLoop};
use skytale_core::config::{ACQUIRE_POLL_MS, BEACON_OUTPUT_POWER_DBM, LinkCipher, PAYLOAD_BLOCK};
use skytale_core::traits::RadioTransport;
use skytale_drivers::input::DipSwitches;
use skytale_drivers::radio::Nrf24;
use skytale_drivers::token::Mfrc522;
use skytale_hal_rp2040::{InputLine, OutputLine, SpiPort};
use skytale_protocol::RadioConfig;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Skytale beacon starting...");

    let p = embassy_rp::init(Default::default());

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 1_000_000;

    // Radio on SPI0
    let radio_spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config.clone());
    let mut radio = Nrf24::new(
        SpiPort::new(radio_spi),
        OutputLine::new(Output::new(p.PIN_17, Level::High)), // CSN
        OutputLine::new(Output::new(p.PIN_20, Level::Low)),  // CE
        Delay,
    );
    let link = RadioConfig::with_output_power(BEACON_OUTPUT_POWER_DBM);
    match radio.configure(&link) {
        Ok(()) => info!(
            "radio up: {=u16} kbps, {=i8} dBm, {=u8} byte frames",
            link.air_data_rate_kbps, link.output_power_dbm, link.transfer_size
        ),
        Err(e) => defmt::panic!("radio configuration failed: {}", e),
    }

    // Badge reader on SPI1
    let reader_spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, spi_config);
    let mut reader = match Mfrc522::new(
        SpiPort::new(reader_spi),
        OutputLine::new(Output::new(p.PIN_13, Level::High)),
    ) {
        Ok(reader) => reader,
        Err(e) => defmt::panic!("badge reader init failed: {}", e),
    };
    info!("badge reader up");

    // DIP switch bank, line 1 (MSB) first
    let mut switches = DipSwitches::new([
        InputLine::new(Input::new(p.PIN_2, Pull::Down)),
        InputLine::new(Input::new(p.PIN_3, Pull::Down)),
        InputLine::new(Input::new(p.PIN_4, Pull::Down)),
        InputLine::new(Input::new(p.PIN_5, Pull::Down)),
    ]);

    let mut acquisition = AcquisitionLoop::<LinkCipher>::new(PAYLOAD_BLOCK);

    loop {
        match acquisition.poll(&mut reader, &mut switches, &mut radio) {
            Ok(report) => {
                if report.sent {
                    // The key itself is never logged
                    info!(
                        "badge cycle complete, frame sent (config {=u8:b})",
                        report.config_bits.unwrap_or(0)
                    );
                }
                if let Some(frame) = report.received {
                    debug!(
                        "inbound frame, block starts {=u8:02x}",
                        frame.block()[0]
                    );
                }
            }
            // A failed round trip means the cipher engine is broken;
            // there is nothing sensible to continue with.
            Err(AcquireError::SelfCheckMismatch) => {
                defmt::panic!("encrypt/decrypt self-check mismatch")
            }
            Err(e) => warn!("acquisition pass failed: {}", e),
        }

        Timer::after(Duration::from_millis(ACQUIRE_POLL_MS)).await;
    }
}
