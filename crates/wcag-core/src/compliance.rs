//! WCAG 2.0 conformance levels and the pass/fail report.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::contrast::contrast_ratio;
use crate::error::ColorError;

/// A WCAG 2.0 conformance level for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// AA, normal text.
    Aa,
    /// AA, large text (at least 18pt, or bold at least 14pt).
    AaLarge,
    /// AAA, normal text.
    Aaa,
    /// AAA, large text.
    AaaLarge,
}

impl Level {
    /// Minimum contrast ratio required to pass this level.
    pub const fn min_ratio(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::AaLarge => 3.0,
            Self::Aaa => 7.0,
            Self::AaaLarge => 4.5,
        }
    }

    /// Human-readable label for reports and status text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aa => "aa",
            Self::AaLarge => "aa-large",
            Self::Aaa => "aaa",
            Self::AaaLarge => "aaa-large",
        }
    }

    /// All four WCAG 2.0 levels, in report order.
    pub fn all() -> &'static [Self] {
        const ALL: [Level; 4] = [Level::Aa, Level::AaLarge, Level::Aaa, Level::AaaLarge];
        &ALL
    }

    /// Whether `ratio` meets this level's threshold.
    pub fn passes(self, ratio: f64) -> bool {
        ratio >= self.min_ratio()
    }
}

/// Pass/fail flags for the four WCAG 2.0 levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LevelFlags {
    /// AA, normal text (ratio ≥ 4.5).
    pub aa: bool,
    /// AA, large text (ratio ≥ 3.0).
    pub aa_large: bool,
    /// AAA, normal text (ratio ≥ 7.0).
    pub aaa: bool,
    /// AAA, large text (ratio ≥ 4.5).
    pub aaa_large: bool,
}

/// Contrast ratio plus the WCAG 2.0 pass/fail states for a color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compliance {
    /// Full-precision contrast ratio.
    pub ratio: f64,
    /// Pass/fail state per conformance level.
    pub levels: LevelFlags,
}

/// Evaluate a foreground/background pair against all WCAG 2.0 levels.
///
/// The ratio is computed once and classified against every threshold; all
/// four flags are always reported together, never a partial result.
pub fn evaluate(
    fg: impl Into<Color>,
    bg: impl Into<Color>,
) -> Result<Compliance, ColorError> {
    let ratio = contrast_ratio(fg, bg)?;
    tracing::trace!(ratio, "classified contrast ratio");

    Ok(Compliance {
        ratio,
        levels: LevelFlags {
            aa: Level::Aa.passes(ratio),
            aa_large: Level::AaLarge.passes(ratio),
            aaa: Level::Aaa.passes(ratio),
            aaa_large: Level::AaaLarge.passes(ratio),
        },
    })
}
