//! Encode Unicode code points into UTF-8 without going through `char`.
//!
//! The crate has two halves: [`encode`], which maps one candidate scalar
//! value to its UTF-8 byte sequence, and [`parse_hex`], which reads a code
//! point from hexadecimal text the way the C locale's `strtol(.., 16)` does,
//! with no process-wide locale state involved.
//!
//! ```rust
//! use ucprint::{encode, parse_hex};
//!
//! let cp = parse_hex("20ac").unwrap();
//! assert_eq!(encode(cp).unwrap().as_bytes(), "€".as_bytes());
//! assert!(encode(0xD800).is_err());
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod encoder;
mod error;
mod hex;


pub use encoder::{EncodedBytes, MAX_CODEPOINT, SURROGATES, encode, utf8_len};
pub use error::{EncodeError, HexError};
pub use hex::parse_hex;
