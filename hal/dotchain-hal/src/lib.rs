//! dotchain Hardware Abstraction Layer
//!
//! This crate defines the transport capability the matrix core writes to.
//! Chip- or framework-specific bindings (see `dotchain-drivers`) implement
//! it, so the encoding pipeline never depends on a particular SPI stack.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dotchain-core (session, encoder)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotchain-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ blocking      │       │ async         │
//! │ SpiDevice     │       │ SpiDevice     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - write-only SPI transport

#![no_std]
#![deny(unsafe_code)]

pub mod spi;

pub use spi::{ChipSelect, Mode, Phase, Polarity, SpiBus, SpiConfig};
