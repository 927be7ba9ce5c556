//! Configuration types and parsing
//!
//! A chain is described by a small TOML document, parsed without `std`
//! by a minimal parser.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::MatrixConfig;
