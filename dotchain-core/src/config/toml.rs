//! Simple TOML parser for chain configuration
//!
//! Handles only the subset needed here, not full TOML.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - `[matrix]` and `[bus]` section headers
//! - Comments (# ...), including trailing comments
//!
//! Keys before any header belong to `[matrix]`.
//!
//! ```toml
//! [matrix]
//! chain_length = 4
//! font = "CP437_FONT_ROTATED"
//! brightness = 7
//!
//! [bus]
//! mode = 0
//! chip_select = "low"
//! frequency = 1000000
//! ```

use dotchain_hal::{ChipSelect, Mode};

use super::types::MatrixConfig;
use crate::font::Font;
use crate::frame::MAX_CHAIN_LEN;
use crate::registers::MAX_INTENSITY;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type or value out of range
    InvalidValue,
    /// Key not recognised in its section
    UnknownKey,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Matrix,
    Bus,
}

/// Parse TOML configuration into MatrixConfig
///
/// Keys that are not given keep their defaults. Unknown font names select
/// the default font.
pub fn parse_config(input: &str) -> Result<MatrixConfig, ParseError> {
    let mut config = MatrixConfig::default();
    let mut section = Section::Matrix;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = line
                .strip_suffix(']')
                .map(|l| &l[1..])
                .ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "matrix" => Ok(Section::Matrix),
        "bus" => Ok(Section::Bus),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Cut a trailing comment, ignoring `#` inside quoted strings
fn strip_comment(value: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in value.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return value[..i].trim_end(),
            _ => {}
        }
    }
    value
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MatrixConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Matrix, "chain_length") => {
            let modules: u8 = parse_int(value)?;
            if modules == 0 || usize::from(modules) > MAX_CHAIN_LEN {
                return Err(ParseError::InvalidValue);
            }
            config.chain_length = modules;
        }
        (Section::Matrix, "font") => {
            config.font = Font::from_name(Some(parse_string(value)));
        }
        (Section::Matrix, "brightness") => {
            let level: u8 = parse_int(value)?;
            if level > MAX_INTENSITY {
                return Err(ParseError::InvalidValue);
            }
            config.brightness = level;
        }
        (Section::Bus, "mode") => {
            config.bus.mode = Mode::from_index(parse_int(value)?).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Bus, "chip_select") => {
            config.bus.chip_select =
                ChipSelect::from_name(parse_string(value)).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Bus, "frequency") => {
            let hz: u32 = parse_int(value)?;
            if hz == 0 {
                return Err(ParseError::InvalidValue);
            }
            config.bus.frequency = hz;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Four FC-16 modules on SPI0
[matrix]
chain_length = 4
font = "CP437_FONT"   # row-major table
brightness = 3

[bus]
mode = 0
chip_select = "low"
frequency = 2000000
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.chain_length, 4);
        assert_eq!(config.font, Font::Cp437);
        assert_eq!(config.brightness, 3);
        assert_eq!(config.bus.mode, Mode::Mode0);
        assert_eq!(config.bus.chip_select, ChipSelect::ActiveLow);
        assert_eq!(config.bus.frequency, 2_000_000);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), MatrixConfig::default());
        assert_eq!(parse_config("# nothing\n\n").unwrap(), MatrixConfig::default());
    }

    #[test]
    fn test_root_keys_are_matrix_keys() {
        let config = parse_config("chain_length = 2").unwrap();
        assert_eq!(config.chain_length, 2);
    }

    #[test]
    fn test_unknown_font_falls_back() {
        let config = parse_config("font = \"SINCLAIR_FONT\"").unwrap();
        assert_eq!(config.font, Font::Cp437Rotated);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(parse_config("brightness = 16"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("brightness = -1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("chain_length = 0"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("chain_length = 33"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("[bus]\nmode = 4"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("[bus]\nfrequency = 0"), Err(ParseError::InvalidValue));
        assert_eq!(
            parse_config("[bus]\nchip_select = \"sideways\""),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_unknown_section_and_key() {
        assert_eq!(parse_config("[stepper]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[matrix"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("rotation = 90"), Err(ParseError::UnknownKey));
        // Keys are scoped to their section
        assert_eq!(parse_config("[bus]\nbrightness = 1"), Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_line_without_value() {
        assert_eq!(parse_config("brightness ="), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("brightness"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_key_value_keeps_hash_in_string() {
        assert_eq!(
            parse_key_value("font = \"a#b\" # comment"),
            Some(("font", "\"a#b\""))
        );
    }
}
