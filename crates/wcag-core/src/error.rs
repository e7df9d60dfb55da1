//! Error type for color parsing and validation.

/// Errors that can occur when resolving a color input to an RGB triple.
///
/// Both kinds are caller errors: the input must be fixed, retrying cannot
/// succeed. Callers branch on the variant, not on the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected 3 or 6 hex digits with an optional leading '#'")]
    InvalidFormat(String),

    #[error("RGB component {0} is outside the 0-255 range")]
    InvalidValue(i64),
}
