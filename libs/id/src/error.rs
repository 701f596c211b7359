//! Error types for identifier parsing, validation, and generation.

use thiserror::Error;

/// Errors that can occur when parsing or validating an identifier.
///
/// These are only surfaced by the strict typed parsers; the boolean surface
/// (`is_valid`) and the formatting passthrough swallow them, since malformed
/// external input is expected and not exceptional.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or whitespace-only.
    #[error("identifier cannot be empty")]
    Empty,

    /// The raw input length is outside the masked/unmasked window.
    #[error("expected between {min} and {max} characters, got {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Removing mask punctuation did not leave the exact unmasked length.
    #[error("expected {expected} characters after removing punctuation, got {actual}")]
    UnmaskedLength { expected: usize, actual: usize },

    /// The input contains characters outside the identifier's alphabet.
    #[error("identifier contains characters outside the allowed alphabet")]
    IllegalCharacter,

    /// A check-digit position holds a non-numeric character.
    #[error("check digit positions must be numeric")]
    CheckDigitNotNumeric,

    /// Every character of the identifier is identical. Such inputs can
    /// satisfy the check-digit arithmetic and are rejected regardless.
    #[error("identifier characters are all identical")]
    Repeated,

    /// The trailing check digits do not match the computed ones.
    #[error("check digits do not match")]
    CheckDigitMismatch,
}

impl ParseError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ParseError::Empty)
    }

    /// Returns true if this error was raised by the normalizer, before any
    /// check-digit arithmetic ran.
    pub fn is_normalization_error(&self) -> bool {
        !matches!(self, ParseError::Repeated | ParseError::CheckDigitMismatch)
    }
}

/// Errors raised for invalid generation parameters.
///
/// Unlike [`ParseError`], these indicate a caller contract violation and are
/// never swallowed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested CPF region digit is outside `0..=9`.
    #[error("invalid region: {0}")]
    InvalidRegion(u8),
}
