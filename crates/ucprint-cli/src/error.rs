//! Error type for a CLI run and its mapping onto exit statuses.

use std::io;

use thiserror::Error;
use ucprint::{EncodeError, HexError};

/// Exit status for a successful run.
pub const EXIT_OK: u8 = 0;
/// Exit status for an empty or malformed argument.
pub const EXIT_USAGE: u8 = 1;
/// Exit status for a value that is not a Unicode scalar value.
pub const EXIT_INVALID: u8 = 2;

/// Why a run stopped early.
///
/// The `Display` text is what gets printed on standard error.
#[derive(Debug, Error)]
pub enum RunError {
    /// An argument was the empty string. Detected before anything is written.
    #[error("Empty argument.")]
    EmptyArgument {
        /// Zero-based position among the positional arguments.
        index: usize,
    },

    /// An argument was not a hexadecimal integer.
    #[error("Invalid hexadecimal integer: {arg}")]
    InvalidHex {
        /// The argument as given.
        arg: String,
        /// What the parser tripped over.
        #[source]
        source: HexError,
    },

    /// An argument carried a minus sign.
    #[error("Not a positive integer: {arg}")]
    Negative {
        /// The argument as given.
        arg: String,
    },

    /// The value parsed but is a surrogate or above U+10FFFF.
    #[error(transparent)]
    InvalidCodepoint(#[from] EncodeError),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyArgument { .. } | Self::InvalidHex { .. } | Self::Io(_) => EXIT_USAGE,
            Self::Negative { .. } | Self::InvalidCodepoint(_) => EXIT_INVALID,
        }
    }

    /// Build the error for an argument that failed to parse.
    pub(crate) fn from_hex(index: usize, arg: &str, source: HexError) -> Self {
        match source {
            HexError::Negative => Self::Negative { arg: arg.to_owned() },
            HexError::Empty => Self::EmptyArgument { index },
            _ => Self::InvalidHex {
                arg: arg.to_owned(),
                source,
            },
        }
    }
}
