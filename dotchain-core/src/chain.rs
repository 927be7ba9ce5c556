//! Chain framing
//!
//! One transmission carries a (register, data) pair for every module.
//! The chain is a shift register: the first pair clocked out ends up in
//! the module farthest from the controller, so data is sent in reverse
//! chain order.
//!
//! ```text
//!  chain:    MCU ──► [module 0] ──► [module 1] ──► [module 2]
//!  wire:     reg, d2, reg, d1, reg, d0
//! ```

use dotchain_hal::SpiBus;
use heapless::Vec;

use crate::error::{InvalidArgument, MatrixError};
use crate::frame::{ChainLength, Frame, MAX_CHAIN_LEN};
use crate::registers;

/// Maximum wire message size (one register/data pair per module)
pub const MAX_MESSAGE_LEN: usize = 2 * MAX_CHAIN_LEN;

/// Register/data pairs for one transmission across the chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WireMessage {
    bytes: Vec<u8, MAX_MESSAGE_LEN>,
}

impl WireMessage {
    /// Frame one register write
    ///
    /// `column` holds one data byte per module in chain order. It is read
    /// back to front and never modified.
    pub fn new(register: u8, column: &[u8]) -> Self {
        let mut bytes = Vec::new();
        for &data in column.iter().rev().take(MAX_CHAIN_LEN) {
            // Cannot overflow: at most MAX_CHAIN_LEN pairs
            let _ = bytes.push(register);
            let _ = bytes.push(data);
        }
        Self { bytes }
    }

    /// Raw bytes as sent on the bus
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Message length in bytes (twice the module count)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the message is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Iterate over (register, data) pairs in wire order
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.bytes.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

impl AsRef<[u8]> for WireMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Frames register writes for a chain and sends them on the bus
pub struct ChainWriter<T> {
    bus: T,
    chain: ChainLength,
}

impl<T: SpiBus> ChainWriter<T> {
    /// Create a writer that owns the bus
    pub fn new(bus: T, chain: ChainLength) -> Self {
        Self { bus, chain }
    }

    /// Number of modules in the chain
    pub fn chain_length(&self) -> ChainLength {
        self.chain
    }

    /// Frame one register write without sending it
    pub fn frame(register: u8, column: &[u8]) -> WireMessage {
        WireMessage::new(register, column)
    }

    /// Frame and send one register write
    ///
    /// `column` must hold exactly one byte per module; anything else is
    /// rejected without bus traffic.
    pub fn write(&mut self, register: u8, column: &[u8]) -> Result<(), MatrixError<T::Error>> {
        self.check_len(column.len())?;
        let message = Self::frame(register, column);
        self.bus
            .write(message.as_bytes())
            .map_err(MatrixError::Transport)
    }

    /// Write the same value to a register on every module
    pub fn broadcast(&mut self, register: u8, value: u8) -> Result<(), MatrixError<T::Error>> {
        let mut column: Vec<u8, MAX_CHAIN_LEN> = Vec::new();
        for _ in 0..self.chain.get() {
            let _ = column.push(value);
        }
        self.write(register, &column)
    }

    /// Send every column of a frame, digit 0 through 7
    ///
    /// Each column is its own transmission. A failed write does not stop
    /// the remaining columns; the first error is returned once all have
    /// been attempted. A frame built for another chain length is rejected
    /// before anything is sent.
    pub fn send_all(&mut self, frame: &Frame) -> Result<(), MatrixError<T::Error>> {
        self.check_len(frame.chain_length())?;
        let mut result = Ok(());

        for (index, column) in frame.columns().enumerate() {
            let register = registers::digit(index as u8);
            if let Err(e) = self.write(register, column) {
                warn!("digit register {=u8} write failed", register);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }

        result
    }

    fn check_len(&self, modules: usize) -> Result<(), InvalidArgument> {
        if modules != self.chain.get() {
            warn!(
                "{} bytes per column on a {}-module chain",
                modules,
                self.chain.get()
            );
            return Err(InvalidArgument::ChainLength(modules));
        }
        Ok(())
    }

    /// Borrow the bus
    pub fn bus(&self) -> &T {
        &self.bus
    }

    /// Give the bus back
    pub fn release(self) -> T {
        self.bus
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::font::Glyph;
    use proptest::prelude::*;
    use std::vec::Vec as StdVec;

    /// Records every transmission; optionally fails selected writes
    #[derive(Default)]
    pub(crate) struct MockBus {
        pub writes: StdVec<StdVec<u8>>,
        pub fail_on: StdVec<usize>,
        pub attempts: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct BusFault;

    impl SpiBus for MockBus {
        type Error = BusFault;

        fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on.contains(&attempt) {
                return Err(BusFault);
            }
            self.writes.push(data.to_vec());
            Ok(())
        }
    }

    fn chain(n: usize) -> ChainLength {
        ChainLength::new(n).unwrap()
    }

    #[test]
    fn test_reverse_module_order() {
        // Modules A, B, C in chain order
        let message = WireMessage::new(0x01, &[0xA0, 0xB0, 0xC0]);
        assert_eq!(message.as_bytes(), &[0x01, 0xC0, 0x01, 0xB0, 0x01, 0xA0]);
    }

    #[test]
    fn test_framing_leaves_column_untouched() {
        let column = [1u8, 2, 3, 4];
        let first = WireMessage::new(0x02, &column);
        let second = WireMessage::new(0x02, &column);
        assert_eq!(column, [1, 2, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pairs() {
        let message = WireMessage::new(0x0A, &[7, 8]);
        let pairs: StdVec<_> = message.pairs().collect();
        assert_eq!(pairs, [(0x0A, 8), (0x0A, 7)]);
    }

    #[test]
    fn test_broadcast() {
        let mut writer = ChainWriter::new(MockBus::default(), chain(3));
        writer.broadcast(registers::INTENSITY, 7).unwrap();

        let bus = writer.release();
        assert_eq!(bus.writes, [[0x0A, 7, 0x0A, 7, 0x0A, 7]]);
    }

    #[test]
    fn test_send_all_writes_digits_in_order() {
        let frame = Frame::from_glyphs([Glyph([1, 2, 3, 4, 5, 6, 7, 8]), Glyph([9; 8])]);
        let mut writer = ChainWriter::new(MockBus::default(), chain(2));
        writer.send_all(&frame).unwrap();

        let bus = writer.release();
        assert_eq!(bus.writes.len(), 8);
        for (i, write) in bus.writes.iter().enumerate() {
            let register = i as u8 + 1;
            assert_eq!(write, &[register, 9, register, i as u8 + 1]);
        }
    }

    #[test]
    fn test_send_all_is_best_effort() {
        let frame = Frame::blank(chain(1));
        let bus = MockBus {
            fail_on: vec![2, 5],
            ..Default::default()
        };
        let mut writer = ChainWriter::new(bus, chain(1));

        assert_eq!(writer.send_all(&frame), Err(MatrixError::Transport(BusFault)));

        let bus = writer.release();
        assert_eq!(bus.attempts, 8);
        assert_eq!(bus.writes.len(), 6);
    }

    #[test]
    fn test_send_all_does_not_consume_frame() {
        let frame = Frame::from_glyphs([Glyph([0x11; 8]), Glyph([0x22; 8])]);
        let before = frame.clone();
        let mut writer = ChainWriter::new(MockBus::default(), chain(2));
        writer.send_all(&frame).unwrap();
        writer.send_all(&frame).unwrap();

        assert_eq!(frame, before);
        let bus = writer.release();
        assert_eq!(bus.writes[0], bus.writes[8]);
    }

    #[test]
    fn test_mismatched_frame_is_rejected_before_sending() {
        let frame = Frame::from_glyphs([Glyph([0xFF; 8])]);
        let mut writer = ChainWriter::new(MockBus::default(), chain(3));

        assert_eq!(
            writer.send_all(&frame),
            Err(MatrixError::InvalidArgument(InvalidArgument::ChainLength(1)))
        );
        assert_eq!(writer.release().attempts, 0);
    }

    #[test]
    fn test_write_rejects_wrong_column_length() {
        let mut writer = ChainWriter::new(MockBus::default(), chain(2));

        assert_eq!(
            writer.write(registers::digit(0), &[1, 2, 3]),
            Err(MatrixError::InvalidArgument(InvalidArgument::ChainLength(3)))
        );
        assert_eq!(
            writer.write(registers::digit(0), &[]),
            Err(MatrixError::InvalidArgument(InvalidArgument::ChainLength(0)))
        );
        writer.write(registers::digit(0), &[1, 2]).unwrap();

        let bus = writer.release();
        assert_eq!(bus.attempts, 1);
        assert_eq!(bus.writes, [[0x01, 2, 0x01, 1]]);
    }

    proptest! {
        #[test]
        fn prop_message_is_two_bytes_per_module(
            register in 0u8..=0x0F,
            column in proptest::collection::vec(any::<u8>(), 1..=MAX_CHAIN_LEN),
        ) {
            let message = WireMessage::new(register, &column);
            prop_assert_eq!(message.len(), 2 * column.len());
            for (i, (reg, data)) in message.pairs().enumerate() {
                prop_assert_eq!(reg, register);
                prop_assert_eq!(data, column[column.len() - 1 - i]);
            }
        }
    }
}
