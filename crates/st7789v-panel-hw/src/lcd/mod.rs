//! LCD display module.
//!
//! Drives the 320x240 RGB565 panel through an ST7789V controller over SPI.

mod device;
mod protocol;

pub use device::{DisplayConfig, DisplayState, LcdDevice};
pub use protocol::{AddressWindow, Command, PIXEL_FORMAT_16BPP};
