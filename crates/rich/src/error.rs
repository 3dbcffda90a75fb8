//! Error types for the helper parsers used by the markup engine.
//!
//! The markup parser itself is total and never returns these. They surface
//! from the standalone helpers (`Rgba::parse`, `parse_size`, ...) so callers
//! can tell *why* a value was rejected; the parser maps each one to its
//! documented fallback.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Errors that can occur when parsing a numeric tag attribute
/// (`[size=..]`, `[typewriter speed=..]`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttributeError {
    /// The value is not a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// The value parsed but is zero, negative or not finite.
    #[error("value must be positive, got {0}")]
    NonPositive(f32),

    /// A `key=value` attribute used a key the tag does not understand.
    #[error("unknown attribute: {0}")]
    UnknownKey(String),
}
