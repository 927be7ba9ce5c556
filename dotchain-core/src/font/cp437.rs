//! 8x8 code page 437 glyphs (0x00-0xFF)
//!
//! One byte per row, top row first. Bit 0 is the leftmost pixel.
//! Control codes are blank.

pub(super) const ROWS: [[u8; 8]; 256] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x01
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x02
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x03
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x04
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x05
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // '#'
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // '$'
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // '&'
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '''
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // '('
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*'
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ','
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '/'
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // '0'
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // '1'
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // '2'
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // '3'
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // '4'
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // '5'
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // '6'
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // '7'
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // '8'
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ';'
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // '<'
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // '='
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // '>'
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // '?'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // '@'
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // 'A'
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // 'B'
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // 'C'
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // 'D'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // 'E'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // 'F'
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // 'G'
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // 'H'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'I'
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // 'J'
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // 'K'
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // 'L'
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // 'M'
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // 'N'
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // 'O'
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // 'P'
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // 'Q'
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // 'R'
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // 'S'
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'T'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // 'U'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // 'W'
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // 'X'
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // 'Y'
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // 'Z'
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // '['
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // '\'
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'a'
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // 'b'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // 'c'
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // 'd'
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'e'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // 'f'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'g'
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // 'h'
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'i'
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // 'j'
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // 'k'
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'l'
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 'm'
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 'n'
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'o'
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // 'p'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // 'q'
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // 's'
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // 't'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'u'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 'w'
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // 'x'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'y'
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // 'z'
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // '}'
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7F
    // Upper half: accented letters, box drawing, Greek and math
    [0x3C, 0x66, 0x03, 0x03, 0x66, 0x3C, 0x18, 0x0E], // 'Ç'
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'ü'
    [0x30, 0x0C, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'é'
    [0x1E, 0x33, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'â'
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'ä'
    [0x06, 0x18, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'à'
    [0x0C, 0x12, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'å'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x0C], // 'ç'
    [0x1E, 0x33, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'ê'
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'ë'
    [0x06, 0x18, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'è'
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'ï'
    [0x1E, 0x33, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'î'
    [0x06, 0x18, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'ì'
    [0x63, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x63, 0x00], // 'Ä'
    [0x1C, 0x14, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x00], // 'Å'
    [0x30, 0x0C, 0x3F, 0x03, 0x1F, 0x03, 0x3F, 0x00], // 'É'
    [0x00, 0x00, 0x76, 0xD8, 0x7E, 0x1B, 0x76, 0x00], // 'æ'
    [0x7C, 0x1E, 0x1B, 0x7F, 0x1B, 0x1B, 0x7B, 0x00], // 'Æ'
    [0x1E, 0x33, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'ô'
    [0x33, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'ö'
    [0x06, 0x18, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'ò'
    [0x1E, 0x33, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'û'
    [0x06, 0x18, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'ù'
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'ÿ'
    [0x63, 0x1C, 0x36, 0x63, 0x63, 0x36, 0x1C, 0x00], // 'Ö'
    [0x63, 0x00, 0x63, 0x63, 0x63, 0x63, 0x3E, 0x00], // 'Ü'
    [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18], // '¢'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x63, 0x3F, 0x00], // '£'
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x00], // '¥'
    [0x0F, 0x1B, 0x5B, 0xEF, 0x23, 0xA3, 0x43, 0x00], // '₧'
    [0x70, 0xD8, 0x18, 0x7E, 0x18, 0x18, 0x1B, 0x0E], // 'ƒ'
    [0x30, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'á'
    [0x30, 0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'í'
    [0x30, 0x0C, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'ó'
    [0x30, 0x0C, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'ú'
    [0x6E, 0x3B, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 'ñ'
    [0x6E, 0x3B, 0x63, 0x67, 0x6B, 0x73, 0x63, 0x00], // 'Ñ'
    [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x7E, 0x00, 0x00], // 'ª'
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x3E, 0x00, 0x00], // 'º'
    [0x0C, 0x00, 0x0C, 0x0C, 0x06, 0x33, 0x1E, 0x00], // '¿'
    [0x00, 0x00, 0x3F, 0x03, 0x03, 0x00, 0x00, 0x00], // '⌐'
    [0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x00], // '¬'
    [0x01, 0x21, 0x11, 0x08, 0x34, 0x22, 0x11, 0x70], // '½'
    [0x01, 0x21, 0x11, 0x08, 0x54, 0x52, 0xF1, 0x40], // '¼'
    [0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x00], // '¡'
    [0x00, 0x6C, 0x36, 0x1B, 0x36, 0x6C, 0x00, 0x00], // '«'
    [0x00, 0x1B, 0x36, 0x6C, 0x36, 0x1B, 0x00, 0x00], // '»'
    [0x55, 0x00, 0xAA, 0x00, 0x55, 0x00, 0xAA, 0x00], // '░'
    [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA], // '▒'
    [0xFF, 0x55, 0xFF, 0xAA, 0xFF, 0x55, 0xFF, 0xAA], // '▓'
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // '│'
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x08, 0x08], // '┤'
    [0x08, 0x08, 0x0F, 0x08, 0x0F, 0x08, 0x08, 0x08], // '╡'
    [0x14, 0x14, 0x14, 0x17, 0x14, 0x14, 0x14, 0x14], // '╢'
    [0x00, 0x00, 0x00, 0x1F, 0x14, 0x14, 0x14, 0x14], // '╖'
    [0x00, 0x00, 0x0F, 0x08, 0x0F, 0x08, 0x08, 0x08], // '╕'
    [0x14, 0x14, 0x17, 0x10, 0x17, 0x14, 0x14, 0x14], // '╣'
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14], // '║'
    [0x00, 0x00, 0x1F, 0x10, 0x17, 0x14, 0x14, 0x14], // '╗'
    [0x14, 0x14, 0x17, 0x10, 0x1F, 0x00, 0x00, 0x00], // '╝'
    [0x14, 0x14, 0x14, 0x1F, 0x00, 0x00, 0x00, 0x00], // '╜'
    [0x08, 0x08, 0x0F, 0x08, 0x0F, 0x00, 0x00, 0x00], // '╛'
    [0x00, 0x00, 0x00, 0x0F, 0x08, 0x08, 0x08, 0x08], // '┐'
    [0x08, 0x08, 0x08, 0xF8, 0x00, 0x00, 0x00, 0x00], // '└'
    [0x08, 0x08, 0x08, 0xFF, 0x00, 0x00, 0x00, 0x00], // '┴'
    [0x00, 0x00, 0x00, 0xFF, 0x08, 0x08, 0x08, 0x08], // '┬'
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0x08, 0x08, 0x08], // '├'
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00], // '─'
    [0x08, 0x08, 0x08, 0xFF, 0x08, 0x08, 0x08, 0x08], // '┼'
    [0x08, 0x08, 0xF8, 0x08, 0xF8, 0x08, 0x08, 0x08], // '╞'
    [0x14, 0x14, 0x14, 0xF4, 0x14, 0x14, 0x14, 0x14], // '╟'
    [0x14, 0x14, 0xF4, 0x04, 0xFC, 0x00, 0x00, 0x00], // '╚'
    [0x00, 0x00, 0xFC, 0x04, 0xF4, 0x14, 0x14, 0x14], // '╔'
    [0x14, 0x14, 0xF7, 0x00, 0xFF, 0x00, 0x00, 0x00], // '╩'
    [0x00, 0x00, 0xFF, 0x00, 0xF7, 0x14, 0x14, 0x14], // '╦'
    [0x14, 0x14, 0xF4, 0x04, 0xF4, 0x14, 0x14, 0x14], // '╠'
    [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00], // '═'
    [0x14, 0x14, 0xF7, 0x00, 0xF7, 0x14, 0x14, 0x14], // '╬'
    [0x08, 0x08, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00], // '╧'
    [0x14, 0x14, 0x14, 0xFF, 0x00, 0x00, 0x00, 0x00], // '╨'
    [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x08, 0x08, 0x08], // '╤'
    [0x00, 0x00, 0x00, 0xFF, 0x14, 0x14, 0x14, 0x14], // '╥'
    [0x14, 0x14, 0x14, 0xFC, 0x00, 0x00, 0x00, 0x00], // '╙'
    [0x08, 0x08, 0xF8, 0x08, 0xF8, 0x00, 0x00, 0x00], // '╘'
    [0x00, 0x00, 0xF8, 0x08, 0xF8, 0x08, 0x08, 0x08], // '╒'
    [0x00, 0x00, 0x00, 0xFC, 0x14, 0x14, 0x14, 0x14], // '╓'
    [0x14, 0x14, 0x14, 0xF7, 0x14, 0x14, 0x14, 0x14], // '╫'
    [0x08, 0x08, 0xFF, 0x00, 0xFF, 0x08, 0x08, 0x08], // '╪'
    [0x08, 0x08, 0x08, 0x0F, 0x00, 0x00, 0x00, 0x00], // '┘'
    [0x00, 0x00, 0x00, 0xF8, 0x08, 0x08, 0x08, 0x08], // '┌'
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // '█'
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF], // '▄'
    [0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F], // '▌'
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // '▐'
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], // '▀'
    [0x00, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00], // 'α'
    [0x1E, 0x33, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // 'ß'
    [0x3F, 0x33, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00], // 'Γ'
    [0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00], // 'π'
    [0x3F, 0x33, 0x06, 0x0C, 0x06, 0x33, 0x3F, 0x00], // 'Σ'
    [0x00, 0x00, 0x7E, 0x1B, 0x1B, 0x1B, 0x0E, 0x00], // 'σ'
    [0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03, 0x00], // 'µ'
    [0x00, 0x6E, 0x3B, 0x18, 0x18, 0x18, 0x18, 0x00], // 'τ'
    [0x3F, 0x0C, 0x1E, 0x33, 0x1E, 0x0C, 0x3F, 0x00], // 'Φ'
    [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00], // 'Θ'
    [0x1C, 0x36, 0x63, 0x63, 0x36, 0x36, 0x77, 0x00], // 'Ω'
    [0x38, 0x0C, 0x18, 0x3E, 0x33, 0x33, 0x1E, 0x00], // 'δ'
    [0x00, 0x00, 0x7E, 0xDB, 0xDB, 0x7E, 0x00, 0x00], // '∞'
    [0x60, 0x30, 0x7E, 0xDB, 0xDB, 0x7E, 0x06, 0x03], // 'φ'
    [0x1C, 0x06, 0x03, 0x1F, 0x03, 0x06, 0x1C, 0x00], // 'ε'
    [0x1E, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x00], // '∩'
    [0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00], // '≡'
    [0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x3F, 0x00], // '±'
    [0x06, 0x0C, 0x18, 0x0C, 0x06, 0x00, 0x3F, 0x00], // '≥'
    [0x18, 0x0C, 0x06, 0x0C, 0x18, 0x00, 0x3F, 0x00], // '≤'
    [0x70, 0xD8, 0xD8, 0x18, 0x18, 0x18, 0x18, 0x18], // '⌠'
    [0x18, 0x18, 0x18, 0x18, 0x1B, 0x1B, 0x0E, 0x00], // '⌡'
    [0x00, 0x0C, 0x00, 0x3F, 0x00, 0x0C, 0x00, 0x00], // '÷'
    [0x00, 0x6E, 0x3B, 0x00, 0x6E, 0x3B, 0x00, 0x00], // '≈'
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // '°'
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // '∙'
    [0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00], // '·'
    [0xF0, 0x30, 0x30, 0x30, 0x37, 0x36, 0x3C, 0x38], // '√'
    [0x1E, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00], // 'ⁿ'
    [0x0E, 0x18, 0x0C, 0x06, 0x1E, 0x00, 0x00, 0x00], // '²'
    [0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00], // '■'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFF
];
