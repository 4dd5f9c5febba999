//! Code point to UTF-8 encoding.
//!
//! The sequence length is chosen by which range the value falls in:
//!
//! | range                                  | bytes | lead byte        |
//! |----------------------------------------|-------|------------------|
//! | `0x0000..0x0080`                       | 1     | the value itself |
//! | `0x0080..0x0800`                       | 2     | `0xC0 + v / 64`  |
//! | `0x0800..0xD800`, `0xE000..0x1_0000`   | 3     | `0xE0 + v / 4096`|
//! | `0x1_0000..0x11_0000`                  | 4     | `0xF0 + v / 262144` |
//!
//! Every following byte is `0x80` plus the next six bits, most significant
//! first. Surrogates (`0xD800..0xE000`) and anything above U+10FFFF are
//! rejected. The input is a `u64` so callers can hand over whatever they
//! parsed without narrowing it first.

use core::{fmt, ops::Deref, ops::Range};

use crate::error::EncodeError;

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u64 = 0x10_FFFF;

/// UTF-16 surrogate code points, never valid on their own.
pub const SURROGATES: Range<u64> = 0xD800..0xE000;

/// The UTF-8 encoding of a single code point: one to four bytes held inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBytes {
    buf: [u8; 4],
    len: u8,
}

impl EncodedBytes {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Number of bytes in the sequence, between 1 and 4.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for EncodedBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedBytes")
            .field(&format_args!("{:02x?}", self.as_bytes()))
            .finish()
    }
}

impl IntoIterator for EncodedBytes {
    type Item = u8;
    type IntoIter = core::iter::Take<core::array::IntoIter<u8, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        self.buf.into_iter().take(len)
    }
}

impl<'a> IntoIterator for &'a EncodedBytes {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

/// Number of bytes `codepoint` occupies in UTF-8.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidCodepoint`] for surrogates and values above
/// [`MAX_CODEPOINT`].
pub fn utf8_len(codepoint: u64) -> Result<usize, EncodeError> {
    if codepoint < 0x80 {
        Ok(1)
    } else if codepoint < 0x800 {
        Ok(2)
    } else if codepoint.wrapping_sub(SURROGATES.start) < 0x800 {
        // Anything below 0xD800 wraps to a huge value and falls through.
        Err(EncodeError::InvalidCodepoint(codepoint))
    } else if codepoint < 0x1_0000 {
        Ok(3)
    } else if codepoint <= MAX_CODEPOINT {
        Ok(4)
    } else {
        Err(EncodeError::InvalidCodepoint(codepoint))
    }
}

/// Encode one code point as UTF-8.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidCodepoint`] for surrogates and values above
/// [`MAX_CODEPOINT`]. Nothing is written anywhere on either path.
///
/// # Examples
///
/// ```rust
/// assert_eq!(ucprint::encode(0xE9).unwrap().as_bytes(), &[0xC3, 0xA9]);
/// assert!(ucprint::encode(0x11_0000).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn encode(codepoint: u64) -> Result<EncodedBytes, EncodeError> {
    let len = utf8_len(codepoint)?;
    let mut buf = [0u8; 4];

    // Each branch's range bounds the lead byte arithmetic, so the casts
    // never drop set bits.
    match len {
        1 => buf[0] = codepoint as u8,
        2 => {
            buf[0] = 0xC0 + (codepoint / 64) as u8;
            buf[1] = continuation(codepoint);
        }
        3 => {
            buf[0] = 0xE0 + (codepoint / 4096) as u8;
            buf[1] = continuation(codepoint / 64);
            buf[2] = continuation(codepoint);
        }
        _ => {
            buf[0] = 0xF0 + (codepoint / 262_144) as u8;
            buf[1] = continuation(codepoint / 4096);
            buf[2] = continuation(codepoint / 64);
            buf[3] = continuation(codepoint);
        }
    }

    Ok(EncodedBytes {
        buf,
        len: len as u8,
    })
}

/// `10xxxxxx` carrying the low six bits of `bits`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn continuation(bits: u64) -> u8 {
    0x80 + (bits % 64) as u8
}
