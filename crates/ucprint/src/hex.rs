//! Locale-independent hexadecimal code point parsing.
//!
//! Accepts what `strtol(text, &end, 16)` accepts in the C locale when `end`
//! must reach the end of the string:
//!
//! ```text
//! [whitespace*] [+|-] [0x|0X] hexdigit+
//! ```
//!
//! The `0x` prefix is only taken as a prefix when a hex digit follows it, so
//! `"0x"` reads as the digit `0` followed by a stray `x`. A `-` sign is
//! accepted syntactically but any non-zero magnitude is reported as
//! [`HexError::Negative`]; `-0` is plain zero.

use crate::error::HexError;

/// Whitespace as classified by `isspace` in the C locale.
#[inline]
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some(u64::from(b - b'0')),
        b'a'..=b'f' => Some(u64::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u64::from(b - b'A') + 10),
        _ => None,
    }
}

/// Parse `text` as a hexadecimal code point.
///
/// # Errors
///
/// See [`HexError`] for the individual cases. Trailing garbage is reported in
/// preference to overflow, and both in preference to a negative sign.
///
/// # Examples
///
/// ```rust
/// use ucprint::{HexError, parse_hex};
///
/// assert_eq!(parse_hex("1F600"), Ok(0x1F600));
/// assert_eq!(parse_hex("0xe9"), Ok(0xE9));
/// assert_eq!(parse_hex("-41"), Err(HexError::Negative));
/// ```
pub fn parse_hex(text: &str) -> Result<u64, HexError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(HexError::Empty);
    }

    let mut pos = bytes.iter().take_while(|&&b| is_c_space(b)).count();

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit)
    {
        pos += 2;
    }

    let digits_start = pos;
    let mut value: Option<u64> = Some(0);
    while let Some(d) = bytes.get(pos).copied().and_then(hex_val) {
        value = value
            .and_then(|v| v.checked_mul(16))
            .and_then(|v| v.checked_add(d));
        pos += 1;
    }

    if pos == digits_start {
        return Err(HexError::NoDigits);
    }

    // Only ASCII has been consumed so far, so `pos` is a char boundary.
    if let Some(found) = text.get(pos..).and_then(|rest| rest.chars().next()) {
        return Err(HexError::TrailingCharacters {
            position: pos,
            found,
        });
    }

    match value {
        None => Err(HexError::Overflow),
        Some(v) if negative && v != 0 => Err(HexError::Negative),
        Some(v) => Ok(v),
    }
}
