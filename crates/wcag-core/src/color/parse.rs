//! Strict parsing of hex color strings.

use crate::color::Rgb;
use crate::error::ColorError;

/// Parse a hex color string into an [`Rgb`] triple.
///
/// Handles color strings in the following formats:
///
/// * `#44FF55`
/// * `44FF55`
/// * `#4F5`
/// * `4F5`
///
/// The short form expands each digit by duplication, so `4F5` and `44FF55`
/// decode to the same triple. Any other length, or any non-hex character,
/// fails with [`ColorError::InvalidFormat`] carrying the offending input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let invalid = || ColorError::InvalidFormat(hex.to_string());

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0]).ok_or_else(invalid)?;
            let g = nibble(bytes[1]).ok_or_else(invalid)?;
            let b = nibble(bytes[2]).ok_or_else(invalid)?;

            // Duplicating a digit is a multiply by 17: 0xF -> 0xFF.
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let pair = |hi: u8, lo: u8| -> Result<u8, ColorError> {
                let h = nibble(hi).ok_or_else(invalid)?;
                let l = nibble(lo).ok_or_else(invalid)?;
                Ok(h << 4 | l)
            };

            Ok(Rgb::new(
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            ))
        }
        _ => Err(invalid()),
    }
}
