//! SSD1306 OLED driver
//!
//! Drives 128x64 SSD1306 panels from a [`roboface_core::Framebuffer`]:
//!
//! - `command`: the controller's opcode table
//! - `bus`: the `DisplayBus` transport seam plus a blocking I2C impl
//! - `driver`: init sequence, page-addressed flush, passthroughs
//!
//! The driver implements [`roboface_core::Panel`], so a
//! `FaceController<Ssd1306<_>>` flushes straight to hardware.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod command;
pub mod driver;

// Re-export key types
pub use bus::{DisplayBus, I2cInterface, DEFAULT_I2C_ADDR};
pub use driver::{DriverState, Error, Ssd1306};
