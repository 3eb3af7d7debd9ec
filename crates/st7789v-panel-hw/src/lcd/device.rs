//! LCD device driving an ST7789V controller over SPI.
//!
//! All drawing goes through a strict command/data discipline: the DC line is
//! driven low for the one command byte and high for its payload, and bulk
//! payloads are split at the transport's single-transfer ceiling without
//! disturbing byte order.

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::protocol::{
    encode_pixel, solid_fill_payload, AddressWindow, Command, PIXEL_FORMAT_16BPP,
};
use crate::bus::{BusTransport, Level};
use crate::font::{Font8x8, Glyph, GlyphSource, FALLBACK_CODE, GLYPH_WIDTH};
use crate::orientation::Orientation;
use crate::{
    Error, Result, LCD_GPIO_BACKLIGHT, LCD_GPIO_DC, LCD_GPIO_RESET, LCD_SPI_BAUD, LCD_SPI_BUS,
    LCD_SPI_CHANNEL,
};

/// Reset pulse width and post-reset settle. Hardware-mandated minimums.
const RESET_HOLD: Duration = Duration::from_millis(10);

/// Mandatory wait between Sleep Out and Display On while the controller
/// finishes its power-up sequence.
const SLEEP_OUT_SETTLE: Duration = Duration::from_millis(120);

/// Vertical pitch between text lines, in pixels.
const LINE_PITCH: u16 = 10;

/// Initialization state of a display handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Resources not yet acquired.
    #[default]
    Uninitialized,
    /// Resource acquisition and controller programming in progress.
    Initializing,
    /// Initialized and accepting drawing operations.
    Ready,
    /// Initialization failed; only teardown is permitted.
    Failed,
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DisplayState::Uninitialized => "uninitialized",
            DisplayState::Initializing => "initializing",
            DisplayState::Ready => "ready",
            DisplayState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Bus parameters and wiring for a display.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    /// SPI bus device number.
    pub bus: u8,
    /// SPI channel (chip enable) on the bus.
    pub channel: u8,
    /// SPI clock rate in Hz.
    pub baud_rate: u32,
    /// Data/command select line.
    pub dc_line: u8,
    /// Hardware reset line.
    pub reset_line: u8,
    /// Backlight enable line.
    pub backlight_line: u8,
    /// Panel orientation programmed at init.
    pub orientation: Orientation,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bus: LCD_SPI_BUS,
            channel: LCD_SPI_CHANNEL,
            baud_rate: LCD_SPI_BAUD,
            dc_line: LCD_GPIO_DC,
            reset_line: LCD_GPIO_RESET,
            backlight_line: LCD_GPIO_BACKLIGHT,
            orientation: Orientation::default(),
        }
    }
}

/// ST7789V display bound to a bus transport.
///
/// The device exclusively owns its bus handle and GPIO lines from `init`
/// until drop; everything claimed is released exactly once, on every exit
/// path.
pub struct LcdDevice<T: BusTransport> {
    bus: T,
    config: DisplayConfig,
    font: Box<dyn GlyphSource + Send + Sync>,
    state: DisplayState,
    bus_open: bool,
    claimed: Vec<u8>,
    width: u16,
    height: u16,
}

impl<T: BusTransport> LcdDevice<T> {
    /// Creates a device with the default wiring and the built-in font.
    ///
    /// No hardware is touched until [`init`](Self::init).
    pub fn new(bus: T) -> Self {
        Self::with_config(bus, DisplayConfig::default())
    }

    /// Creates a device with explicit bus parameters and wiring.
    pub fn with_config(bus: T, config: DisplayConfig) -> Self {
        let (width, height) = config.orientation.dimensions();
        Self {
            bus,
            config,
            font: Box::new(Font8x8),
            state: DisplayState::Uninitialized,
            bus_open: false,
            claimed: Vec::new(),
            width,
            height,
        }
    }

    /// Replaces the glyph source used by [`draw_text`](Self::draw_text).
    pub fn with_font(mut self, font: Box<dyn GlyphSource + Send + Sync>) -> Self {
        self.font = font;
        self
    }

    /// Returns the current initialization state.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns the panel dimensions for the configured orientation.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Acquires the bus and GPIO lines, resets the controller, and programs
    /// it for 16-bit pixels.
    ///
    /// On failure the device enters the `failed` state and accepts no
    /// further drawing; whatever was claimed is still released on drop.
    /// Recovery from any failure is dropping the device and creating a new
    /// one.
    pub fn init(&mut self) -> Result<()> {
        if self.state != DisplayState::Uninitialized {
            return Err(Error::NotReady(self.state));
        }
        self.state = DisplayState::Initializing;
        match self.init_sequence() {
            Ok(()) => {
                self.state = DisplayState::Ready;
                info!(
                    "display initialized ({}x{}, {})",
                    self.width, self.height, self.config.orientation
                );
                Ok(())
            }
            Err(e) => {
                self.state = DisplayState::Failed;
                Err(e)
            }
        }
    }

    fn init_sequence(&mut self) -> Result<()> {
        let cfg = self.config;

        self.bus.open_bus(cfg.bus, cfg.channel, cfg.baud_rate)?;
        self.bus_open = true;

        self.claim(cfg.dc_line, Level::Low)?;
        self.claim(cfg.reset_line, Level::High)?;
        // Claimed low so no uninitialized frame is ever visible.
        self.claim(cfg.backlight_line, Level::Low)?;

        self.hard_reset()?;

        self.write_command(Command::MemoryAccessCtrl)?;
        self.write_data(&[cfg.orientation.madctl()])?;
        self.write_command(Command::PixelFormat)?;
        self.write_data(&[PIXEL_FORMAT_16BPP])?;
        self.write_command(Command::SleepOut)?;
        thread::sleep(SLEEP_OUT_SETTLE);
        self.write_command(Command::DisplayOn)?;

        self.bus.write_level(cfg.backlight_line, Level::High)?;
        Ok(())
    }

    fn claim(&mut self, line: u8, initial: Level) -> Result<()> {
        self.bus.claim_output(line, initial)?;
        self.claimed.push(line);
        Ok(())
    }

    /// Pulses the reset line: >= 10 ms low, then >= 10 ms high before the
    /// first command.
    fn hard_reset(&mut self) -> Result<()> {
        let reset = self.config.reset_line;
        self.bus.write_level(reset, Level::Low)?;
        thread::sleep(RESET_HOLD);
        self.bus.write_level(reset, Level::High)?;
        thread::sleep(RESET_HOLD);
        Ok(())
    }

    /// Programs the addressing window for subsequent pixel data.
    ///
    /// The controller then expects exactly `window.pixel_count()` pixels via
    /// [`write_pixels`](Self::write_pixels); sending fewer or more
    /// desynchronizes it. That contract is the caller's and is not checked
    /// here.
    pub fn set_address_window(&mut self, window: &AddressWindow) -> Result<()> {
        self.ensure_ready()?;
        self.write_command(Command::ColumnAddrSet)?;
        self.write_data(&window.column_payload())?;
        self.write_command(Command::RowAddrSet)?;
        self.write_data(&window.row_payload())?;
        self.write_command(Command::MemoryWrite)
    }

    /// Streams pixels, big-endian, into the window programmed by
    /// [`set_address_window`](Self::set_address_window).
    pub fn write_pixels(&mut self, pixels: &[u16]) -> Result<()> {
        self.ensure_ready()?;
        let mut payload = Vec::with_capacity(pixels.len() * 2);
        for &pixel in pixels {
            payload.extend_from_slice(&encode_pixel(pixel));
        }
        self.write_data(&payload)
    }

    /// Fills the whole panel with one color.
    pub fn fill_screen(&mut self, color: u16) -> Result<()> {
        self.ensure_ready()?;
        let window = AddressWindow::full(self.width, self.height);
        self.set_address_window(&window)?;
        self.write_data(&solid_fill_payload(color, window.pixel_count()))?;
        debug!("filled screen with {:#06x}", color);
        Ok(())
    }

    /// Writes a single pixel.
    ///
    /// Coordinates are not validated against the panel extent; out-of-range
    /// values reach the controller unchecked and its behavior is undefined.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<()> {
        self.set_address_window(&AddressWindow::single(x, y))?;
        self.write_pixels(&[color])
    }

    /// Draws text with the 8x8 font, transparent background.
    ///
    /// `'\n'` moves to the next text line (10-pixel pitch) back at the
    /// call's original x. Characters outside the 7-bit range render as
    /// `'?'`. The cursor wraps to a new line when the next glyph would
    /// cross the right edge.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, color: u16) -> Result<()> {
        self.ensure_ready()?;
        let mut cursor = TextCursor::new(x, y);
        for ch in text.chars() {
            if ch == '\n' {
                cursor.newline();
                continue;
            }
            let code = if (ch as u32) < 128 {
                ch as u8
            } else {
                FALLBACK_CODE
            };
            let glyph: Glyph = *self.font.glyph(code);
            for (row, bits) in glyph.iter().copied().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> col) & 1 != 0 {
                        self.draw_pixel(cursor.x + col, cursor.y + row as u16, color)?;
                    }
                }
            }
            cursor.advance(self.width);
        }
        debug!("drew {} chars at ({}, {})", text.chars().count(), x, y);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.state == DisplayState::Ready {
            Ok(())
        } else {
            Err(Error::NotReady(self.state))
        }
    }

    /// Sends one command byte with the DC line low.
    fn write_command(&mut self, command: Command) -> Result<()> {
        let dc = self.config.dc_line;
        self.bus.write_level(dc, Level::Low)?;
        self.transfer_all(&[command as u8])
    }

    /// Sends payload bytes with the DC line high, chunked to the
    /// transport's ceiling. Chunk i+1 begins exactly where chunk i ended.
    fn write_data(&mut self, data: &[u8]) -> Result<()> {
        let dc = self.config.dc_line;
        self.bus.write_level(dc, Level::High)?;
        self.transfer_all(data)
    }

    fn transfer_all(&mut self, bytes: &[u8]) -> Result<()> {
        let max = self.bus.max_transfer();
        for chunk in bytes.chunks(max) {
            let written = self.bus.transfer(chunk)?;
            if written != chunk.len() {
                return Err(Error::ShortTransfer {
                    expected: chunk.len(),
                    written,
                });
            }
        }
        Ok(())
    }

    fn release_resources(&mut self) {
        for line in self.claimed.drain(..) {
            self.bus.release_output(line);
        }
        if self.bus_open {
            self.bus.close_bus();
            self.bus_open = false;
            debug!("released display bus and GPIO lines");
        }
    }
}

impl<T: BusTransport> Drop for LcdDevice<T> {
    fn drop(&mut self) {
        self.release_resources();
    }
}

/// Cursor state while laying out a text run.
struct TextCursor {
    x: u16,
    y: u16,
    line_start: u16,
}

impl TextCursor {
    fn new(x: u16, y: u16) -> Self {
        Self { x, y, line_start: x }
    }

    /// Moves to the start of the next text line.
    fn newline(&mut self) {
        self.x = self.line_start;
        self.y += LINE_PITCH;
    }

    /// Advances past one glyph, wrapping when the next glyph would cross
    /// the right edge.
    fn advance(&mut self, width: u16) {
        self.x += GLYPH_WIDTH;
        if self.x + GLYPH_WIDTH > width {
            self.newline();
        }
    }
}
