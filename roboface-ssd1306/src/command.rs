//! SSD1306 command set
//!
//! Opcode values from the SSD1306 datasheet. These are fixed wire bytes;
//! `init` and `flush` depend on them matching the controller exactly.

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_CONTRAST: u8 = 0x81;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const SET_START_LINE: u8 = 0x40;
pub const MEMORY_MODE: u8 = 0x20;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const SEG_REMAP_NORMAL: u8 = 0xA0;
pub const SEG_REMAP_MIRROR: u8 = 0xA1;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_SCROLL_OFF: u8 = 0x2E;
/// Page start address, OR the page number into the low nibble
pub const SET_PAGE_START: u8 = 0xB0;
/// Column start address low nibble
pub const SET_LOW_COLUMN: u8 = 0x00;
/// Column start address high nibble
pub const SET_HIGH_COLUMN: u8 = 0x10;
