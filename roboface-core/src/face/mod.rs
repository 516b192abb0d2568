//! Face model and animation control
//!
//! - `style`: closed style/expression enums and their resting parameter table
//! - `layout`: pixel geometry derived from the panel dimensions
//! - `model`: per-tick frame composition and rasterization
//! - `controller`: the public API driving transitions, blinks and flushes

pub mod controller;
pub mod layout;
pub mod model;
pub mod style;
