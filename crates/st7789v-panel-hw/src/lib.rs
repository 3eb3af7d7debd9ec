//! ST7789V Panel Hardware Library
//!
//! Drives SPI-attached ST7789V TFT panels (320x240, RGB565) from userspace.
//! Raw SPI writes and GPIO toggling go through the [`BusTransport`] trait,
//! so the command/data protocol logic is independent of the backend
//! (lgpio, rppal, a test recorder, ...).

pub mod bus;
pub mod color;
pub mod error;
pub mod font;
pub mod lcd;
pub mod orientation;

pub use bus::{BusTransport, Level, MAX_TRANSFER};
pub use color::{parse_hex_color, rgb565_to_rgb888, rgb888_to_rgb565};
pub use error::{Error, Result};
pub use font::{Font8x8, Glyph, GlyphSource};
pub use lcd::{DisplayConfig, DisplayState, LcdDevice};
pub use orientation::Orientation;

/// LCD display dimensions
pub const LCD_WIDTH: u16 = 320;
pub const LCD_HEIGHT: u16 = 240;

/// Default SPI device (4 on Raspberry Pi 5, 0 on Pi 4) and channel (CE0)
pub const LCD_SPI_BUS: u8 = 4;
pub const LCD_SPI_CHANNEL: u8 = 0;

/// Default SPI clock rate in Hz
pub const LCD_SPI_BAUD: u32 = 40_000_000;

/// Default GPIO output lines (BCM numbering)
pub const LCD_GPIO_DC: u8 = 5;
pub const LCD_GPIO_RESET: u8 = 27;
pub const LCD_GPIO_BACKLIGHT: u8 = 6;
