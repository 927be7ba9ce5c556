//! Board-agnostic encoding core for chained 8x8 LED matrices
//!
//! This crate turns text into the register writes a chain of MAX7219-class
//! controllers expects, without depending on a particular SPI stack:
//!
//! - Glyph tables and font selection
//! - Frame encoding (glyph lookup + row/column transpose)
//! - Chain framing (register/data pairs, reversed module order)
//! - Controller session (one-shot init, brightness, rendering)
//! - Configuration types and a small TOML subset parser
//!
//! # Pipeline
//!
//! ```text
//! text ──► FrameEncoder ──► Frame (8 columns × N modules)
//!                               │
//!                               ▼
//!          ChainWriter ──► 8 × WireMessage (2N bytes each) ──► SpiBus
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod chain;
pub mod config;
pub mod error;
pub mod font;
pub mod frame;
pub mod registers;
pub mod session;

pub use chain::{ChainWriter, WireMessage, MAX_MESSAGE_LEN};
pub use config::{parse_config, MatrixConfig, ParseError};
pub use error::{InvalidArgument, MatrixError, OpenError};
pub use font::{Font, Glyph, GlyphSource};
pub use frame::{encode, ChainLength, Frame, COLUMNS, MAX_CHAIN_LEN};
pub use session::ControllerSession;
