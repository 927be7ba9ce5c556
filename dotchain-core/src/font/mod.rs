//! Glyph tables and font selection
//!
//! Glyphs are authored row-major: one byte per row, bit 0 = leftmost
//! column. Modules wired FC-16 style scan columns instead, which is what
//! the rotated table provides. Both tables come from the same data; the
//! rotated one is transposed at compile time.

mod cp437;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of glyphs carried by the built-in tables
pub const TABLE_LEN: usize = 256;

/// One 8x8 character bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(pub [u8; 8]);

impl Glyph {
    /// All pixels off; substituted for anything the table does not map
    pub const BLANK: Glyph = Glyph([0; 8]);

    /// The eight bitmap bytes
    pub const fn bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Flip the bitmap over its main diagonal
    ///
    /// Bit `c` of byte `r` becomes bit `r` of byte `c`.
    pub const fn transpose(&self) -> Glyph {
        let mut out = [0u8; 8];
        let mut r = 0;
        while r < 8 {
            let mut c = 0;
            while c < 8 {
                if self.0[r] & (1 << c) != 0 {
                    out[c] |= 1 << r;
                }
                c += 1;
            }
            r += 1;
        }
        Glyph(out)
    }

    /// Check if every pixel is off
    pub fn is_blank(&self) -> bool {
        self.0 == [0; 8]
    }
}

/// Anything that can map a character code to a glyph
///
/// Lookups never fail: unmapped codes resolve to [`Glyph::BLANK`].
pub trait GlyphSource {
    /// Glyph for a character code
    fn glyph(&self, code: u32) -> Glyph;
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn glyph(&self, code: u32) -> Glyph {
        (**self).glyph(code)
    }
}

/// A caller-provided table indexed by character code
impl GlyphSource for [Glyph] {
    fn glyph(&self, code: u32) -> Glyph {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.get(i))
            .copied()
            .unwrap_or(Glyph::BLANK)
    }
}

/// Built-in fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// Code page 437, columns as bytes (ready for digit registers)
    #[default]
    Cp437Rotated,
    /// Code page 437, rows as bytes (authoring order)
    Cp437,
}

impl Font {
    /// Resolve a font by name
    ///
    /// Absent or unknown names fall back to the default font.
    pub fn from_name(name: Option<&str>) -> Font {
        name.and_then(Self::find).unwrap_or_default()
    }

    /// Strict lookup by name (case-insensitive)
    pub fn find(name: &str) -> Option<Font> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("CP437_FONT_ROTATED") || name.eq_ignore_ascii_case("cp437_rotated")
        {
            Some(Font::Cp437Rotated)
        } else if name.eq_ignore_ascii_case("CP437_FONT") || name.eq_ignore_ascii_case("cp437") {
            Some(Font::Cp437)
        } else {
            None
        }
    }

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Font::Cp437Rotated => "CP437_FONT_ROTATED",
            Font::Cp437 => "CP437_FONT",
        }
    }

    /// The backing glyph table
    pub fn table(&self) -> &'static [Glyph; TABLE_LEN] {
        match self {
            Font::Cp437Rotated => &CP437_ROTATED,
            Font::Cp437 => &CP437,
        }
    }
}

impl GlyphSource for Font {
    fn glyph(&self, code: u32) -> Glyph {
        self.table().as_slice().glyph(code)
    }
}

/// Look up a glyph in one of the built-in fonts
pub fn lookup(code: u32, font: Font) -> Glyph {
    font.glyph(code)
}

const fn build_table(rotate: bool) -> [Glyph; TABLE_LEN] {
    let mut table = [Glyph::BLANK; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let glyph = Glyph(cp437::ROWS[i]);
        table[i] = if rotate { glyph.transpose() } else { glyph };
        i += 1;
    }
    table
}

static CP437: [Glyph; TABLE_LEN] = build_table(false);
static CP437_ROTATED: [Glyph; TABLE_LEN] = build_table(true);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letter_a_rows() {
        let a = lookup(u32::from('A'), Font::Cp437);
        assert_eq!(a.bytes(), &[0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00]);
    }

    #[test]
    fn test_rotated_is_transposed_rows() {
        for code in 0..TABLE_LEN as u32 {
            assert_eq!(
                lookup(code, Font::Cp437Rotated),
                lookup(code, Font::Cp437).transpose()
            );
        }
    }

    #[test]
    fn test_transpose_single_pixel() {
        // Row 1, column 3 moves to row 3, column 1
        let glyph = Glyph([0, 1 << 3, 0, 0, 0, 0, 0, 0]);
        let t = glyph.transpose();
        assert_eq!(t.bytes(), &[0, 0, 0, 1 << 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_space_is_blank() {
        assert!(lookup(u32::from(' '), Font::Cp437Rotated).is_blank());
        assert!(lookup(u32::from(' '), Font::Cp437).is_blank());
    }

    #[test]
    fn test_unmapped_codes_fall_back_to_blank() {
        assert_eq!(lookup(0x100, Font::Cp437), Glyph::BLANK);
        assert_eq!(lookup(0x100, Font::Cp437Rotated), Glyph::BLANK);
        assert_eq!(lookup(u32::from('€'), Font::Cp437), Glyph::BLANK);
        assert_eq!(lookup(u32::MAX, Font::Cp437), Glyph::BLANK);
    }

    #[test]
    fn test_upper_half_is_populated() {
        assert_eq!(lookup(0xDB, Font::Cp437), Glyph([0xFF; 8]));
        assert_eq!(lookup(0xDB, Font::Cp437Rotated), Glyph([0xFF; 8]));
        assert_eq!(lookup(0xDF, Font::Cp437).bytes()[..4], [0xFF; 4]);
        assert_eq!(lookup(0xDF, Font::Cp437).bytes()[4..], [0x00; 4]);

        // Only the non-breaking space is blank above 0x7F
        let blank: Vec<u32> = (0x80..=0xFF)
            .filter(|&code| lookup(code, Font::Cp437).is_blank())
            .collect();
        assert_eq!(blank, [0xFF]);
    }

    #[test]
    fn test_box_drawing_reaches_cell_edges() {
        // Horizontal line spans the full width, vertical line the full height
        let horizontal = lookup(0xC4, Font::Cp437);
        assert!(horizontal.bytes().contains(&0xFF));
        let vertical = lookup(0xB3, Font::Cp437);
        assert!(vertical.bytes().iter().all(|&row| row != 0 && row == vertical.bytes()[0]));
    }

    #[test]
    fn test_font_names() {
        assert_eq!(Font::from_name(None), Font::Cp437Rotated);
        assert_eq!(Font::from_name(Some("CP437_FONT")), Font::Cp437);
        assert_eq!(Font::from_name(Some("cp437_rotated")), Font::Cp437Rotated);
        assert_eq!(Font::from_name(Some("SINCLAIR_FONT")), Font::Cp437Rotated);
        assert_eq!(Font::from_name(Some("")), Font::default());
        assert_eq!(Font::find("nope"), None);
    }

    #[test]
    fn test_name_round_trips_through_find() {
        for font in [Font::Cp437, Font::Cp437Rotated] {
            assert_eq!(Font::find(font.name()), Some(font));
        }
    }

    #[test]
    fn test_custom_table() {
        let table = [Glyph([1; 8]), Glyph([2; 8])];
        assert_eq!(table.as_slice().glyph(1), Glyph([2; 8]));
        assert_eq!(table.as_slice().glyph(2), Glyph::BLANK);
    }

    proptest! {
        #[test]
        fn prop_transpose_twice_is_identity(bytes in any::<[u8; 8]>()) {
            let glyph = Glyph(bytes);
            prop_assert_eq!(glyph.transpose().transpose(), glyph);
        }

        #[test]
        fn prop_transpose_preserves_lit_pixels(bytes in any::<[u8; 8]>()) {
            let lit = |g: &Glyph| g.bytes().iter().map(|b| b.count_ones()).sum::<u32>();
            let glyph = Glyph(bytes);
            prop_assert_eq!(lit(&glyph.transpose()), lit(&glyph));
        }
    }
}
