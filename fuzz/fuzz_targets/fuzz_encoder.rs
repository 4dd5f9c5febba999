#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ucprint::{EncodeError, MAX_CODEPOINT, encode, parse_hex};

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    /// A raw candidate, biased half the time into the scalar value range.
    Codepoint { raw: u64, in_range: bool },
    /// Arbitrary text fed through the hex parser first.
    Text(&'a str),
}

fn check(cp: u64) {
    let reference = u32::try_from(cp).ok().and_then(char::from_u32);
    match (reference, encode(cp)) {
        (Some(c), Ok(bytes)) => {
            assert_eq!(bytes.as_bytes(), c.encode_utf8(&mut [0; 4]).as_bytes());
        }
        (None, Err(err)) => assert_eq!(err, EncodeError::InvalidCodepoint(cp)),
        (reference, result) => panic!("{cp:#x}: char says {reference:?}, encode says {result:?}"),
    }
}

fuzz_target!(|input: Input<'_>| {
    match input {
        Input::Codepoint { raw, in_range } => {
            check(if in_range { raw % (MAX_CODEPOINT + 1) } else { raw });
        }
        Input::Text(text) => {
            if let Ok(cp) = parse_hex(text) {
                check(cp);
                // Whatever parsed must survive a trip through its own rendering.
                assert_eq!(parse_hex(&format!("{cp:x}")), Ok(cp));
            }
        }
    }
});
