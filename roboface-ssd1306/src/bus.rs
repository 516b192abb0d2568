//! Display transport seam
//!
//! The driver only needs ordered, synchronous command and data writes; this
//! trait captures that so tests can record the wire traffic and other
//! transports (SPI with a D/C pin) can slot in later.

use embedded_hal::i2c::I2c;

/// Default SSD1306 I2C address (SA0 low; 0x3D with SA0 high)
pub const DEFAULT_I2C_ADDR: u8 = 0x3C;

/// I2C control byte announcing command bytes
const CONTROL_CMD: u8 = 0x00;
/// I2C control byte announcing display data
const CONTROL_DATA: u8 = 0x40;

/// Largest single data write: control byte + one page of columns
const MAX_DATA_WRITE: usize = 1 + roboface_core::WIDTH;

/// Synchronous command/data transport to the panel controller
///
/// Writes either complete fully or fail with the transport's error; the
/// driver never retries.
pub trait DisplayBus {
    type Error;

    /// Write command bytes
    fn write_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Write display data bytes
    fn write_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Blocking I2C transport with SSD1306 control-byte framing
pub struct I2cInterface<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Wrap an I2C bus at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_addr(i2c, DEFAULT_I2C_ADDR)
    }

    /// Wrap an I2C bus at an explicit address
    pub fn with_addr(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayBus for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        // Commands go one at a time, each framed with the command control byte
        for &byte in bytes {
            self.i2c.write(self.addr, &[CONTROL_CMD, byte])?;
        }
        Ok(())
    }

    fn write_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut frame = [0u8; MAX_DATA_WRITE];
        frame[0] = CONTROL_DATA;
        // Page-sized chunks keep the scratch frame bounded
        for chunk in bytes.chunks(MAX_DATA_WRITE - 1) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.addr, &frame[..=chunk.len()])?;
        }
        Ok(())
    }
}
