//! WCAG 2.0 contrast ratio between two colors.

use crate::color::Color;
use crate::error::ColorError;
use crate::luminance::luminance_of;

/// Contrast ratio between a foreground and a background color.
///
/// ```text
/// ratio = (lighter + 0.05) / (darker + 0.05)
/// ```
///
/// where `lighter` and `darker` are the relative luminances of the two
/// colors. The ratio is symmetric in its arguments and ranges from 1.0
/// (identical luminance) to 21.0 (black against white).
///
/// Both colors are resolved and validated before any luminance math, so an
/// invalid background is reported even when the foreground is already the
/// one in error. The result keeps full `f64` precision; see [`rounded`]
/// for display rounding.
pub fn contrast_ratio(
    fg: impl Into<Color>,
    bg: impl Into<Color>,
) -> Result<f64, ColorError> {
    let fg = fg.into().resolve()?;
    let bg = bg.into().resolve()?;

    let l1 = luminance_of(fg);
    let l2 = luminance_of(bg);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };

    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Round a metric to `decimals` places for display.
///
/// Core results keep full precision. Apply this at the presentation edge
/// when fixture-comparable output is wanted; two decimals is the common
/// convention for contrast ratios.
pub fn rounded(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
