//! Relative luminance per the WCAG 2.0 definition.
//!
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef>

use crate::color::{Color, Rgb};
use crate::error::ColorError;

/// Rec. 709 luminance weights used by the WCAG 2.0 definition.
const LUMA_REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// sRGB-to-linear transfer for a single 8-bit channel.
///
/// ```text
/// c = v / 255
/// c <= 0.03928 → c / 12.92
/// c >  0.03928 → ((c + 0.055) / 1.055) ^ 2.4
/// ```
///
/// WCAG 2.0 keeps the 0.03928 cut from the original sRGB draft; IEC
/// 61966-2-1 later moved it to 0.04045. The two differ only below one
/// 8-bit step, and the WCAG constant is the normative one here.
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, from 0.0 (black) to 1.0 (white).
///
/// Hex strings are parsed first; explicit triples are range-checked and
/// rejected with [`ColorError::InvalidValue`] when a component falls
/// outside `0..=255`. The result keeps full `f64` precision; rounding is
/// left to the presentation edge (see [`crate::contrast::rounded`]).
pub fn relative_luminance(color: impl Into<Color>) -> Result<f64, ColorError> {
    let rgb = color.into().resolve()?;
    Ok(luminance_of(rgb))
}

/// Luminance of an already-validated triple.
pub(crate) fn luminance_of(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.channels();
    LUMA_REC709[0] * srgb_to_linear(r)
        + LUMA_REC709[1] * srgb_to_linear(g)
        + LUMA_REC709[2] * srgb_to_linear(b)
}
