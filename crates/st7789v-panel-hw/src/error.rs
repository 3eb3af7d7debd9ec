//! Error types for the ST7789V panel hardware library.

use crate::lcd::DisplayState;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interacting with the hardware.
#[derive(Error, Debug)]
pub enum Error {
    /// SPI bus device could not be opened.
    #[error("SPI bus {bus}.{channel} unavailable: {reason}")]
    BusUnavailable {
        bus: u8,
        channel: u8,
        reason: String,
    },

    /// GPIO output line could not be claimed.
    #[error("GPIO line {line} unavailable: {reason}")]
    LineUnavailable { line: u8, reason: String },

    /// The transport rejected a byte transfer. The controller may be left
    /// mid-command, so the write is never retried.
    #[error("SPI transfer failed: {0}")]
    Transfer(String),

    /// The transport accepted fewer bytes than were handed to it.
    #[error("short SPI transfer: wrote {written} of {expected} bytes")]
    ShortTransfer { expected: usize, written: usize },

    /// Operation attempted on a display that is not ready.
    #[error("display not ready (state: {0})")]
    NotReady(DisplayState),

    /// Invalid orientation value.
    #[error("invalid orientation: {0}")]
    InvalidOrientation(String),
}
