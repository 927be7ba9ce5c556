//! Frame encoding
//!
//! Turns text into the column-major frame the digit registers want:
//! 8 columns, each holding one byte per module in chain order.
//!
//! ```text
//!  module:     0       1       2
//!  glyph:   [r0..r7][r0..r7][r0..r7]      (row-major, as authored)
//!                 │ transpose
//!                 ▼
//!  column 0: [g0.r0, g1.r0, g2.r0]  ──► digit register 0x01
//!  ...
//!  column 7: [g0.r7, g1.r7, g2.r7]  ──► digit register 0x08
//! ```

use heapless::Vec;

use crate::error::InvalidArgument;
use crate::font::{Glyph, GlyphSource};

/// Maximum number of modules in one chain
pub const MAX_CHAIN_LEN: usize = 32;

/// Number of digit registers (columns) per module
pub const COLUMNS: usize = 8;

/// Validated number of modules in a chain (1..=MAX_CHAIN_LEN)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainLength(usize);

impl ChainLength {
    /// A single module
    pub const ONE: ChainLength = ChainLength(1);

    /// Validate a module count
    pub fn new(modules: usize) -> Result<Self, InvalidArgument> {
        if modules == 0 || modules > MAX_CHAIN_LEN {
            return Err(InvalidArgument::ChainLength(modules));
        }
        Ok(Self(modules))
    }

    /// Number of modules
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<usize> for ChainLength {
    type Error = InvalidArgument;

    fn try_from(modules: usize) -> Result<Self, Self::Error> {
        Self::new(modules)
    }
}

/// Column-major bitmap data for one render
///
/// `column(c)[m]` is byte `c` of the glyph shown on module `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    columns: [Vec<u8, MAX_CHAIN_LEN>; COLUMNS],
}

impl Frame {
    /// A frame with every LED off
    pub fn blank(chain: ChainLength) -> Self {
        Self::from_glyphs(core::iter::repeat(Glyph::BLANK).take(chain.get()))
    }

    /// Build a frame from glyphs in chain order
    ///
    /// Glyphs past `MAX_CHAIN_LEN` are ignored.
    pub fn from_glyphs<I>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = Glyph>,
    {
        let mut columns: [Vec<u8, MAX_CHAIN_LEN>; COLUMNS] = Default::default();
        for glyph in glyphs.into_iter().take(MAX_CHAIN_LEN) {
            for (column, &byte) in columns.iter_mut().zip(glyph.bytes()) {
                // Cannot overflow: input is capped at MAX_CHAIN_LEN glyphs
                let _ = column.push(byte);
            }
        }
        Self { columns }
    }

    /// Bytes for one column, one per module in chain order
    ///
    /// # Panics
    ///
    /// Panics if `index >= COLUMNS`.
    pub fn column(&self, index: usize) -> &[u8] {
        &self.columns[index]
    }

    /// All columns in register order
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> {
        self.columns.iter().map(|c| c.as_slice())
    }

    /// Number of modules covered by this frame
    pub fn chain_length(&self) -> usize {
        self.columns[0].len()
    }

    /// Glyph shown on a module, reassembled from the columns
    pub fn glyph(&self, module: usize) -> Option<Glyph> {
        if module >= self.chain_length() {
            return None;
        }
        let mut bytes = [0u8; COLUMNS];
        for (byte, column) in bytes.iter_mut().zip(self.columns.iter()) {
            *byte = column[module];
        }
        Some(Glyph(bytes))
    }
}

/// Encode text into a frame for `chain` modules
///
/// - Absent or empty text shows one space per module.
/// - Text longer than the chain is truncated; extra characters are dropped.
/// - Positions the text does not reach show a space.
pub fn encode<G>(text: Option<&str>, font: &G, chain: ChainLength) -> Frame
where
    G: GlyphSource + ?Sized,
{
    let text = text.unwrap_or("");
    let pad = font.glyph(u32::from(' '));

    let glyphs = text
        .chars()
        .map(|ch| font.glyph(u32::from(ch)))
        .chain(core::iter::repeat(pad))
        .take(chain.get());

    let frame = Frame::from_glyphs(glyphs);
    trace!("encoded frame for {} modules", chain.get());
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{lookup, Font};
    use proptest::prelude::*;

    fn chain(n: usize) -> ChainLength {
        ChainLength::new(n).unwrap()
    }

    #[test]
    fn test_chain_length_bounds() {
        assert_eq!(ChainLength::new(0), Err(InvalidArgument::ChainLength(0)));
        assert_eq!(
            ChainLength::new(MAX_CHAIN_LEN + 1),
            Err(InvalidArgument::ChainLength(MAX_CHAIN_LEN + 1))
        );
        assert_eq!(ChainLength::new(MAX_CHAIN_LEN).map(ChainLength::get), Ok(MAX_CHAIN_LEN));
        assert_eq!(ChainLength::default().get(), 1);
    }

    #[test]
    fn test_column_holds_row_of_each_glyph() {
        let frame = encode(Some("AB"), &Font::Cp437, chain(2));
        let a = lookup(u32::from('A'), Font::Cp437);
        let b = lookup(u32::from('B'), Font::Cp437);

        for c in 0..COLUMNS {
            assert_eq!(frame.column(c), &[a.bytes()[c], b.bytes()[c]]);
        }
    }

    #[test]
    fn test_empty_text_fills_chain_with_spaces() {
        let frame = encode(Some(""), &Font::Cp437Rotated, chain(4));
        assert_eq!(frame.chain_length(), 4);
        assert_eq!(frame, Frame::blank(chain(4)));

        let frame = encode(None, &Font::Cp437Rotated, chain(3));
        assert_eq!(frame, Frame::blank(chain(3)));
    }

    #[test]
    fn test_text_is_truncated_to_chain() {
        let frame = encode(Some("HELLO"), &Font::Cp437, chain(2));
        assert_eq!(frame.chain_length(), 2);
        assert_eq!(frame.glyph(0), Some(lookup(u32::from('H'), Font::Cp437)));
        assert_eq!(frame.glyph(1), Some(lookup(u32::from('E'), Font::Cp437)));
        assert_eq!(frame.glyph(2), None);
    }

    #[test]
    fn test_short_text_is_space_padded() {
        let frame = encode(Some("AB"), &Font::Cp437, chain(3));
        assert_eq!(frame.glyph(2), Some(Glyph::BLANK));
    }

    #[test]
    fn test_frame_does_not_transpose_modules() {
        // With N != 8 the module axis keeps its own length
        let frame = encode(Some("XYZ"), &Font::Cp437, chain(3));
        assert_eq!(frame.columns().count(), COLUMNS);
        assert!(frame.columns().all(|c| c.len() == 3));
    }

    #[test]
    fn test_unknown_character_renders_blank() {
        let frame = encode(Some("€"), &Font::Cp437, chain(1));
        assert_eq!(frame.glyph(0), Some(Glyph::BLANK));
    }

    #[test]
    fn test_latin1_codes_index_the_table() {
        // U+00DB indexes table entry 0xDB (full block)
        let frame = encode(Some("\u{DB}"), &Font::Cp437, chain(1));
        assert_eq!(frame.glyph(0), Some(Glyph([0xFF; 8])));
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        "[ -~]{0,40}"
    }

    proptest! {
        #[test]
        fn prop_frame_shape(text in text_strategy(), n in 1..=MAX_CHAIN_LEN) {
            let frame = encode(Some(text.as_str()), &Font::Cp437Rotated, chain(n));
            prop_assert_eq!(frame.columns().count(), COLUMNS);
            for column in frame.columns() {
                prop_assert_eq!(column.len(), n);
            }
        }

        #[test]
        fn prop_truncates_to_leading_characters(text in "[ -~]{1,40}", n in 1..=MAX_CHAIN_LEN) {
            prop_assume!(text.chars().count() >= n);
            let frame = encode(Some(text.as_str()), &Font::Cp437, chain(n));
            let leading: String = text.chars().take(n).collect();
            prop_assert_eq!(frame, encode(Some(leading.as_str()), &Font::Cp437, chain(n)));
        }

        #[test]
        fn prop_glyphs_survive_encoding(text in "[ -~]{1,32}") {
            let n = text.chars().count();
            let frame = encode(Some(text.as_str()), &Font::Cp437, chain(n));
            for (m, ch) in text.chars().enumerate() {
                prop_assert_eq!(frame.glyph(m), Some(lookup(u32::from(ch), Font::Cp437)));
            }
        }
    }
}
