//! Board-agnostic core of the robo-face renderer
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Bit-packed monochrome framebuffer in SSD1306 page layout
//! - Integer shape rasterizer (circles, rounded rects, polygons, Béziers)
//! - Face model: style/expression parameter tables and frame composition
//! - Face controller: expression transitions, blink scripting, tick loop
//!
//! The only seam to hardware is the [`Panel`] trait, implemented by driver
//! crates such as `roboface-ssd1306`.

#![no_std]
#![deny(unsafe_code)]

pub mod face;
pub mod framebuffer;
pub mod raster;

// Re-export key types
pub use face::controller::{BlinkTarget, FaceConfig, FaceController, Panel};
pub use face::model::{EyelidState, FaceFrame, LidPose};
pub use face::style::{Easing, Expression, FaceParams, Style};
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
