//! Transport bindings for dotchain
//!
//! This crate connects the matrix core to real SPI stacks:
//!
//! - [`SpiDeviceBus`] - blocking `embedded-hal` 1.0 `SpiDevice`
//! - [`AsyncSpiDeviceBus`] - `embedded-hal-async` `SpiDevice`
//! - [`SharedSession`] - single-flight access to one session from async tasks
//! - [`clock_mode`] - configured SPI mode as an `embedded-hal` mode
//!
//! Which binding is used is decided when the session is built; the core
//! only ever sees [`dotchain_hal::SpiBus`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod shared;
pub mod spi;

pub use shared::SharedSession;
pub use spi::{clock_mode, AsyncSpiDeviceBus, SpiDeviceBus};
