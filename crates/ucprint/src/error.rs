use thiserror::Error;

use crate::encoder::SURROGATES;

/// Failure to encode a candidate code point.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The value lies in the surrogate range or above U+10FFFF.
    #[error("Invalid Unicode code point: {0:#x}")]
    InvalidCodepoint(u64),
}

impl EncodeError {
    /// The value that was rejected.
    #[must_use]
    pub fn codepoint(&self) -> u64 {
        match *self {
            Self::InvalidCodepoint(cp) => cp,
        }
    }

    /// Whether the rejected value is a UTF-16 surrogate rather than out of
    /// range.
    #[must_use]
    pub fn is_surrogate(&self) -> bool {
        SURROGATES.contains(&self.codepoint())
    }
}

/// Failure to read a code point from hexadecimal text.
///
/// Mirrors the ways `strtol(.., 16)` can fail in the C locale, with the sign
/// check folded in.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// The text was empty.
    #[error("empty input")]
    Empty,
    /// Whitespace, sign and prefix were present but no digits followed.
    #[error("no hexadecimal digits")]
    NoDigits,
    /// Something other than a hex digit followed the digits.
    #[error("unexpected character '{found}' at byte {position}")]
    TrailingCharacters {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// The magnitude does not fit in a `u64`.
    #[error("value does not fit in 64 bits")]
    Overflow,
    /// A `-` sign with a non-zero magnitude.
    #[error("value is negative")]
    Negative,
}
