//! SSD1306 driver
//!
//! Owns the bus handle and mirrors a [`Framebuffer`] to the panel with
//! page-addressed writes. The driver moves through
//! `Uninitialized → Initialized → Streaming` and never retries a failed
//! write: an `init` failure leaves the instance unusable and the caller
//! reconstructs it once the bus is fixed.

use roboface_core::framebuffer::{Framebuffer, PAGES};
use roboface_core::Panel;

use crate::bus::DisplayBus;
use crate::command as cmd;

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, init sequence not yet sent
    Uninitialized,
    /// Init sequence accepted, no frame flushed yet
    Initialized,
    /// At least one frame on the panel
    Streaming,
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport failure; the current operation is aborted
    Bus(E),
    /// `flush` called before `init`
    NotInitialized,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

/// Bit-exact power-up sequence (SSD1306 datasheet §8.9, external VCC off,
/// charge pump on, page addressing mode)
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80, // Suggested clock divide ratio / oscillator frequency
    cmd::SET_MULTIPLEX,
    0x3F, // 64 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14, // Internal charge pump on
    cmd::MEMORY_MODE,
    0x02, // Page addressing mode
    cmd::SEG_REMAP_MIRROR,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12, // Alternative COM pin configuration
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::SET_SCROLL_OFF,
    cmd::DISPLAY_ON,
];

/// SSD1306 panel driver over any [`DisplayBus`]
pub struct Ssd1306<B> {
    bus: B,
    state: DriverState,
}

impl<B: DisplayBus> Ssd1306<B> {
    /// Create an uninitialized driver owning the bus
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            state: DriverState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Send the power-up command sequence
    ///
    /// A transport failure here is fatal for this instance; discard the
    /// driver and rebuild it after fixing the bus.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(INIT_SEQUENCE)?;
        self.state = DriverState::Initialized;
        Ok(())
    }

    /// Mirror the framebuffer to the panel
    ///
    /// One command write (page + column address) and one data write per
    /// page. Reads the framebuffer only; a mid-flush bus failure aborts and
    /// leaves both the buffer and the remaining pages untouched.
    pub fn flush(&mut self, fb: &Framebuffer) -> Result<(), Error<B::Error>> {
        if self.state == DriverState::Uninitialized {
            return Err(Error::NotInitialized);
        }
        for (page, columns) in fb.pages().enumerate() {
            self.bus.write_command(&[
                cmd::SET_PAGE_START | page as u8,
                cmd::SET_LOW_COLUMN,
                cmd::SET_HIGH_COLUMN,
            ])?;
            self.bus.write_data(columns)?;
        }
        self.state = DriverState::Streaming;
        Ok(())
    }

    /// Set panel contrast
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error<B::Error>> {
        self.bus.write_command(&[cmd::SET_CONTRAST, level])?;
        Ok(())
    }

    /// Invert on-panel colors without touching the framebuffer
    pub fn set_invert(&mut self, invert: bool) -> Result<(), Error<B::Error>> {
        let byte = if invert {
            cmd::INVERT_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        };
        self.bus.write_command(&[byte])?;
        Ok(())
    }

    /// Panel power on/off; RAM contents survive power-off
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        let byte = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.bus.write_command(&[byte])?;
        Ok(())
    }

    /// Access the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the bus handle
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: DisplayBus> Panel for Ssd1306<B> {
    type Error = Error<B::Error>;

    fn flush(&mut self, fb: &Framebuffer) -> Result<(), Self::Error> {
        Ssd1306::flush(self, fb)
    }
}
