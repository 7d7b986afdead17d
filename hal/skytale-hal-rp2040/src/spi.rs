//! RP2040 blocking SPI wrapper

use embassy_rp::spi::{Blocking, Error, Instance, Spi};

use skytale_hal::spi;

/// Blocking SPI master port
pub struct SpiPort<'d, T: Instance> {
    inner: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> SpiPort<'d, T> {
    /// Wrap a configured embassy-rp blocking SPI instance
    pub fn new(inner: Spi<'d, T, Blocking>) -> Self {
        Self { inner }
    }
}

impl<T: Instance> spi::SpiBus for SpiPort<'_, T> {
    type Error = Error;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Error> {
        self.inner.blocking_transfer(read, write)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        self.inner.blocking_write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.inner.blocking_read(buf)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Error> {
        self.inner.blocking_transfer_in_place(data)
    }
}
