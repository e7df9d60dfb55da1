//! Color inputs and validated RGB triples.

pub mod parse;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

pub use parse::hex_to_rgb;

/// A validated RGB triple. Every channel is in `0..=255` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a triple from already-validated channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in array form, red/green/blue order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A color as supplied by a caller: either a hex string or an explicit
/// RGB triple.
///
/// Triples are carried as wide signed integers so that out-of-range input
/// (`256`, `-1`) is representable and rejected at resolution time rather
/// than silently clamped. Resolution never mutates caller data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// A hex color string (`"#44FF55"`, `"44FF55"`, `"#4F5"`, `"4F5"`).
    Hex(String),
    /// An explicit `[r, g, b]` triple, each expected in `0..=255`.
    Rgb([i64; 3]),
}

impl Color {
    /// Resolve to a validated [`Rgb`] triple.
    ///
    /// Hex strings go through [`parse::hex_to_rgb`]; explicit triples are
    /// range-checked. Fails with [`ColorError::InvalidFormat`] for malformed
    /// hex and [`ColorError::InvalidValue`] for an out-of-range component.
    pub fn resolve(&self) -> Result<Rgb, ColorError> {
        match self {
            Self::Hex(hex) => parse::hex_to_rgb(hex),
            Self::Rgb(channels) => {
                for &v in channels {
                    if !(0..=255).contains(&v) {
                        return Err(ColorError::InvalidValue(v));
                    }
                }
                Ok(Rgb::new(
                    channels[0] as u8,
                    channels[1] as u8,
                    channels[2] as u8,
                ))
            }
        }
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for Color {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<[i64; 3]> for Color {
    fn from(channels: [i64; 3]) -> Self {
        Self::Rgb(channels)
    }
}

impl From<(i64, i64, i64)> for Color {
    fn from((r, g, b): (i64, i64, i64)) -> Self {
        Self::Rgb([r, g, b])
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb([i64::from(rgb.r), i64::from(rgb.g), i64::from(rgb.b)])
    }
}
