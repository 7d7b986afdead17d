//! Skytale panel - receiver / presentation node
//!
//! Waits behind the debounced start gate, runs the one-time cipher
//! self-test, then enters the presentation loop: poll the radio, decrypt
//! and decode inbound frames, drive the pointing servos, pulse the
//! buzzer, and scroll the message across the 4-digit display - all from
//! one cooperative loop with bounded pauses.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use skytale_core::config::{
    BUZZER_PULSE_MS, ENROLLED_TOKEN, GATE_POLL_MS, LinkCipher, PANEL_OUTPUT_POWER_DBM,
    POINT_LATITUDE, POINT_LONGITUDE, SCROLL_MESSAGE, SCROLL_STEP_GAP_US,
};
use skytale_core::kdf;
use skytale_core::present::{selftest, Presenter};
use skytale_core::traits::{ConfigSwitches, RadioTransport};
use skytale_drivers::actuator::{Buzzer, Servo};
use skytale_drivers::display::SevenSeg;
use skytale_drivers::input::{DipSwitches, GateButton};
use skytale_drivers::radio::Nrf24;
use skytale_hal_rp2040::{InputLine, OutputLine, ServoPwm, SpiPort};
use skytale_protocol::RadioConfig;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Skytale panel starting...");

    let p = embassy_rp::init(Default::default());

    // 7-segment display: segment lines a..g, then digit commons 1..4.
    // All lines are active-low; start everything high (off).
    let mut display = SevenSeg::new(
        [
            OutputLine::new(Output::new(p.PIN_0, Level::High)),
            OutputLine::new(Output::new(p.PIN_1, Level::High)),
            OutputLine::new(Output::new(p.PIN_2, Level::High)),
            OutputLine::new(Output::new(p.PIN_3, Level::High)),
            OutputLine::new(Output::new(p.PIN_4, Level::High)),
            OutputLine::new(Output::new(p.PIN_5, Level::High)),
            OutputLine::new(Output::new(p.PIN_6, Level::High)),
        ],
        [
            OutputLine::new(Output::new(p.PIN_7, Level::High)),
            OutputLine::new(Output::new(p.PIN_9, Level::High)),
            OutputLine::new(Output::new(p.PIN_10, Level::High)),
            OutputLine::new(Output::new(p.PIN_11, Level::High)),
        ],
    );

    // Pointing servos, one PWM slice each; both start at neutral
    let mut servo_lat = Servo::new(ServoPwm::new(Pwm::new_output_a(
        p.PWM_SLICE4,
        p.PIN_8,
        Default::default(),
    )));
    let mut servo_lon = Servo::new(ServoPwm::new(Pwm::new_output_a(
        p.PWM_SLICE7,
        p.PIN_14,
        Default::default(),
    )));

    let mut buzzer = Buzzer::new(OutputLine::new(Output::new(p.PIN_21, Level::Low)));
    let mut gate = GateButton::new(InputLine::new(Input::new(p.PIN_22, Pull::Up)));

    // Radio on SPI0
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 1_000_000;
    let radio_spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);
    let mut radio = Nrf24::new(
        SpiPort::new(radio_spi),
        OutputLine::new(Output::new(p.PIN_17, Level::High)), // CSN
        OutputLine::new(Output::new(p.PIN_20, Level::Low)),  // CE
        Delay,
    );
    let link = RadioConfig::with_output_power(PANEL_OUTPUT_POWER_DBM);
    match radio.configure(&link) {
        Ok(()) => info!(
            "radio up: {=u16} kbps, {=i8} dBm, {=u8} byte frames",
            link.air_data_rate_kbps, link.output_power_dbm, link.transfer_size
        ),
        Err(e) => defmt::panic!("radio configuration failed: {}", e),
    }

    // DIP switch bank; must match the beacon's setting for the link key
    let mut switches = DipSwitches::new([
        InputLine::new(Input::new(p.PIN_26, Pull::Down)),
        InputLine::new(Input::new(p.PIN_27, Pull::Down)),
        InputLine::new(Input::new(p.PIN_28, Pull::Down)),
        InputLine::new(Input::new(p.PIN_15, Pull::Down)),
    ]);

    // Hold here until the operator opens the gate
    while !gate.is_ready() {
        Timer::after(Duration::from_millis(GATE_POLL_MS)).await;
    }
    info!("gate open");

    // One-time bootstrap self-test before any radio traffic is trusted
    match selftest::run(&LinkCipher::from(selftest::SEED_KEY)) {
        Ok(block) => info!("cipher self-test passed, seed block starts {=u8:02x}", block[0]),
        Err(e) => defmt::panic!("cipher self-test failed: {}", e),
    }

    // Receive key: enrolled badge UID + this panel's DIP nibble,
    // derived exactly as the beacon derives its transmit key
    let nibble = switches.read_nibble();
    let cipher = LinkCipher::from(kdf::derive(&ENROLLED_TOKEN, nibble));
    info!("receive key derived (config {=u8:b})", nibble.value());

    let mut presenter = Presenter::new(SCROLL_MESSAGE, POINT_LATITUDE, POINT_LONGITUDE);
    let mut delay = Delay;

    loop {
        // Re-check the gate each pass; releasing it pauses presentation
        while !gate.is_ready() {
            Timer::after(Duration::from_millis(GATE_POLL_MS)).await;
        }

        match radio.poll_receive() {
            Ok(Some(frame)) => {
                let digits = presenter.ingest(&cipher, &frame);
                info!("frame received, showing {=u8:02x}..", digits.chars()[0]);
            }
            Ok(None) => {}
            Err(e) => warn!("radio receive failed: {}", e),
        }

        let pass = presenter.tick();
        servo_lat.set_pulse_us(pass.servos.lat_us);
        servo_lon.set_pulse_us(pass.servos.lon_us);
        buzzer.pulse(&mut delay, BUZZER_PULSE_MS);
        display.show_window(&pass.window, &mut delay);

        Timer::after(Duration::from_micros(SCROLL_STEP_GAP_US as u64)).await;
    }
}
