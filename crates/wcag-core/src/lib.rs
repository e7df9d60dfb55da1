//! WCAG 2.0 color accessibility metrics.
//!
//! This crate computes the contrast metrics defined by WCAG 2.0: hex color
//! parsing, relative luminance, the contrast ratio between two colors, and
//! pass/fail classification against the AA/AAA conformance thresholds.
//! Every operation is a pure function over its inputs — no I/O, no shared
//! state, safe to call from any thread.

pub mod color;
pub mod compliance;
pub mod contrast;
pub mod error;
pub mod luminance;

// Re-exports for convenience.
pub use color::{Color, Rgb, hex_to_rgb};
pub use compliance::{Compliance, Level, LevelFlags, evaluate};
pub use contrast::contrast_ratio;
pub use error::ColorError;
pub use luminance::relative_luminance;
