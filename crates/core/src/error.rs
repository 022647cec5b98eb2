//! Error types for lchcolor.
//!
//! Conversions themselves never fail; these cover parsing, configuration
//! and output.

use thiserror::Error;

/// Errors produced outside the pure conversion functions.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Width or height was zero, or their product overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color space name was not recognized.
    #[error("unknown color space: {0}")]
    UnknownSpace(String),

    /// A hue interpolation mode name was not recognized.
    #[error("unknown hue interpolation: {0}")]
    UnknownHueMode(String),

    /// A gradient spec failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Writing an output file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
