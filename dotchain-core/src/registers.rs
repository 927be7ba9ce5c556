//! MAX7219 register map
//!
//! Every transmission to a module is a 16-bit word: register address in
//! the high byte, data in the low byte. Chained modules shift the words
//! along, so one chip-select cycle carries one word per module.

/// No-op register, used to skip a module in the chain
pub const NO_OP: u8 = 0x00;
/// First digit register (column 0); digits 0-7 are 0x01-0x08
pub const DIGIT0: u8 = 0x01;
/// Decode mode (0 = raw matrix, 0xFF = Code-B seven-segment)
pub const DECODE_MODE: u8 = 0x09;
/// LED intensity (0-15)
pub const INTENSITY: u8 = 0x0A;
/// Number of scanned digits minus one
pub const SCAN_LIMIT: u8 = 0x0B;
/// Shutdown (0 = shutdown, 1 = normal operation)
pub const SHUTDOWN: u8 = 0x0C;
/// Display test (1 = all LEDs on)
pub const DISPLAY_TEST: u8 = 0x0F;

/// Number of digit registers per module
pub const NUM_DIGITS: u8 = 8;

/// Highest accepted intensity value
pub const MAX_INTENSITY: u8 = 15;

/// Data values for the control registers
pub mod value {
    /// Scan all eight digits
    pub const SCAN_ALL_DIGITS: u8 = 0x07;
    /// No decode for digits 7:0
    pub const NO_DECODE: u8 = 0x00;
    /// Display test off
    pub const TEST_OFF: u8 = 0x00;
    /// Display test on
    pub const TEST_ON: u8 = 0x01;
    /// Shutdown mode
    pub const SHUTDOWN: u8 = 0x00;
    /// Normal operation
    pub const NORMAL_OPERATION: u8 = 0x01;
}

/// Register address for a digit (column) index
///
/// Indices past the last digit wrap, so callers should stay within
/// `0..NUM_DIGITS`.
pub const fn digit(index: u8) -> u8 {
    DIGIT0 + (index % NUM_DIGITS)
}
