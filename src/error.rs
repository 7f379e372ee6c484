//! Error types for color parsing and conversion.

use thiserror::Error;

/// Error type for color operations.
///
/// Classification failure is the single engine-level error: every conversion
/// and metric propagates it unchanged, and only [`crate::is_valid`] converts
/// it to a boolean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input matched none of the supported color grammars.
    #[error("not a color: {0}")]
    UnrecognizedFormat(String),

    /// Hex expansion was requested for an input that is not a hex color.
    #[error("not a hex color: {0}")]
    NotHex(String),
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
