//! Controller session
//!
//! Owns the bus for one chain and tracks controller state. The session is
//! the only writer on its bus, so the eight digit writes of a render are
//! never interleaved with other traffic.
//!
//! # Initialization
//!
//! On open, every module is configured once, in this order:
//!
//! | Register     | Value | Meaning                   |
//! |--------------|-------|---------------------------|
//! | SCAN_LIMIT   | 7     | scan all 8 digits         |
//! | DECODE_MODE  | 0     | raw matrix, no Code-B     |
//! | DISPLAY_TEST | 0     | test mode off             |
//! | SHUTDOWN     | 1     | normal operation          |
//! | INTENSITY    | 0-15  | configured brightness     |

use dotchain_hal::SpiBus;

use crate::chain::ChainWriter;
use crate::config::MatrixConfig;
use crate::error::{InvalidArgument, MatrixError, OpenError};
use crate::font::{Font, GlyphSource};
use crate::frame::{self, ChainLength, Frame};
use crate::registers::{self, value};

/// Brightness applied when none is configured
pub const DEFAULT_BRIGHTNESS: u8 = 7;

/// A chain of matrix modules behind one bus
pub struct ControllerSession<T> {
    writer: ChainWriter<T>,
    font: Font,
    brightness: u8,
    initialized: bool,
}

impl<T: SpiBus> ControllerSession<T> {
    /// Wrap a bus without touching the hardware
    ///
    /// Call [`initialize`](Self::initialize) before rendering.
    pub fn new(bus: T, chain: ChainLength) -> Self {
        Self {
            writer: ChainWriter::new(bus, chain),
            font: Font::default(),
            brightness: DEFAULT_BRIGHTNESS,
            initialized: false,
        }
    }

    /// Take ownership of the bus and initialize the chain
    ///
    /// On any failure the bus is handed back inside the error.
    pub fn open(bus: T, config: &MatrixConfig) -> Result<Self, OpenError<T, T::Error>> {
        let chain = match ChainLength::new(usize::from(config.chain_length)) {
            Ok(chain) => chain,
            Err(e) => return Err(OpenError { error: e.into(), bus }),
        };
        if config.brightness > registers::MAX_INTENSITY {
            return Err(OpenError {
                error: InvalidArgument::Brightness(i16::from(config.brightness)).into(),
                bus,
            });
        }

        let mut session = Self::new(bus, chain);
        session.font = config.font;
        session.brightness = config.brightness;

        match session.initialize() {
            Ok(()) => Ok(session),
            Err(error) => Err(OpenError {
                error,
                bus: session.release(),
            }),
        }
    }

    /// Run the one-shot controller setup
    ///
    /// Does nothing once it has succeeded. A failed attempt leaves the
    /// session uninitialized so it can be retried.
    pub fn initialize(&mut self) -> Result<(), MatrixError<T::Error>> {
        if self.initialized {
            trace!("already initialized");
            return Ok(());
        }

        let setup = [
            (registers::SCAN_LIMIT, value::SCAN_ALL_DIGITS),
            (registers::DECODE_MODE, value::NO_DECODE),
            (registers::DISPLAY_TEST, value::TEST_OFF),
            (registers::SHUTDOWN, value::NORMAL_OPERATION),
            (registers::INTENSITY, self.brightness),
        ];
        for (register, data) in setup {
            self.writer.broadcast(register, data)?;
        }

        self.initialized = true;
        info!(
            "matrix chain initialized: {} modules, brightness {=u8}",
            self.writer.chain_length().get(),
            self.brightness
        );
        Ok(())
    }

    /// Set LED intensity on every module (0-15)
    ///
    /// Out-of-range levels are rejected without bus traffic and the
    /// previous brightness is kept.
    pub fn set_brightness(&mut self, level: i16) -> Result<(), MatrixError<T::Error>> {
        if level < 0 || level > i16::from(registers::MAX_INTENSITY) {
            warn!("brightness {=i16} out of range", level);
            return Err(InvalidArgument::Brightness(level).into());
        }

        let level = level as u8;
        self.writer.broadcast(registers::INTENSITY, level)?;
        self.brightness = level;
        debug!("brightness set to {=u8}", level);
        Ok(())
    }

    /// Render text using an explicit glyph source
    ///
    /// Writes all eight digit registers even if one fails; the first
    /// failure is returned.
    pub fn render<G>(&mut self, text: Option<&str>, font: &G) -> Result<(), MatrixError<T::Error>>
    where
        G: GlyphSource + ?Sized,
    {
        let frame = frame::encode(text, font, self.writer.chain_length());
        self.write_frame(&frame)
    }

    /// Render text in the session's font
    pub fn render_text(&mut self, text: &str) -> Result<(), MatrixError<T::Error>> {
        let font = self.font;
        self.render(Some(text), &font)
    }

    /// Send a prepared frame
    ///
    /// The frame must cover exactly [`chain_length`](Self::chain_length)
    /// modules; otherwise nothing is sent.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), MatrixError<T::Error>> {
        self.writer.send_all(frame)
    }

    /// Turn every LED off
    pub fn clear(&mut self) -> Result<(), MatrixError<T::Error>> {
        let frame = Frame::blank(self.writer.chain_length());
        self.write_frame(&frame)
    }

    /// Leave or enter shutdown mode
    ///
    /// Register contents survive shutdown; only the display is blanked.
    pub fn set_power(&mut self, on: bool) -> Result<(), MatrixError<T::Error>> {
        let data = if on {
            value::NORMAL_OPERATION
        } else {
            value::SHUTDOWN
        };
        self.writer.broadcast(registers::SHUTDOWN, data)
    }

    /// Light every LED (display test) or return to normal
    pub fn set_display_test(&mut self, on: bool) -> Result<(), MatrixError<T::Error>> {
        let data = if on { value::TEST_ON } else { value::TEST_OFF };
        self.writer.broadcast(registers::DISPLAY_TEST, data)
    }

    /// Change the font used by [`render_text`](Self::render_text)
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Current font
    pub fn font(&self) -> Font {
        self.font
    }

    /// Last brightness successfully written
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of modules in the chain
    pub fn chain_length(&self) -> ChainLength {
        self.writer.chain_length()
    }

    /// Check if the setup sequence has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Close the session and give the bus back
    pub fn release(self) -> T {
        self.writer.release()
    }
}
