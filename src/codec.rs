//! Conversion between the 16-byte binary form and textual UUID representations.
//!
//! Encoding always produces the 8-4-4-4-12 canonical form in lower case. Decoding accepts five
//! representations, selected purely by input length:
//!
//! | Length | Representation       | Example                                         |
//! | ------ | -------------------- | ----------------------------------------------- |
//! | 36     | canonical            | `6ba7b810-9dad-11d1-80b4-00c04fd430c8`          |
//! | 32     | raw hex              | `6ba7b8109dad11d180b400c04fd430c8`              |
//! | 38     | braced canonical     | `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`        |
//! | 34     | braced raw hex       | `{6ba7b8109dad11d180b400c04fd430c8}`            |
//! | 45     | URN                  | `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8` |
//!
//! Hex digits are case-insensitive; the `urn:uuid:` prefix is not.

use crate::error::{Error, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

const URN_PREFIX: &[u8] = b"urn:uuid:";

/// Returns the canonical 8-4-4-4-12 lower-case representation of `bytes`.
pub fn encode(bytes: &[u8; 16]) -> [u8; 36] {
    let mut buffer = [0u8; 36];
    let mut j = 0;
    for (i, e) in bytes.iter().enumerate() {
        buffer[j] = DIGITS[(e >> 4) as usize];
        buffer[j + 1] = DIGITS[(e & 15) as usize];
        j += 2;
        if i == 3 || i == 5 || i == 7 || i == 9 {
            buffer[j] = b'-';
            j += 1;
        }
    }
    debug_assert!(buffer.is_ascii());
    buffer
}

/// Parses any of the five accepted representations into 16 bytes.
///
/// # Errors
///
/// Returns [`Error::Format`] if `src` does not exactly match one of the representations.
pub fn decode(src: &str) -> Result<[u8; 16]> {
    let b = src.as_bytes();
    let parsed = match b.len() {
        36 => decode_hyphenated(b, 0),
        32 => decode_simple(b, 0),
        38 => expect_braces(b).and_then(|_| decode_hyphenated(b, 1)),
        34 => expect_braces(b).and_then(|_| decode_simple(b, 1)),
        45 => expect_urn_prefix(b).and_then(|_| decode_hyphenated(b, URN_PREFIX.len())),
        _ => Err(None),
    };
    parsed.map_err(|index| Error::Format {
        src: src.into(),
        index,
    })
}

/// Checks the first and last characters, returning the index of a mismatching one.
fn expect_braces(b: &[u8]) -> Result<(), Option<usize>> {
    if b[0] != b'{' {
        Err(Some(0))
    } else if b[b.len() - 1] != b'}' {
        Err(Some(b.len() - 1))
    } else {
        Ok(())
    }
}

fn expect_urn_prefix(b: &[u8]) -> Result<(), Option<usize>> {
    match URN_PREFIX.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Err(Some(i)),
        None => Ok(()),
    }
}

/// Decodes 8-4-4-4-12 hex digits starting at `start`.
fn decode_hyphenated(b: &[u8], start: usize) -> Result<[u8; 16], Option<usize>> {
    let mut dst = [0u8; 16];
    let mut j = start;
    for (i, e) in dst.iter_mut().enumerate() {
        *e = decode_pair(b, j)?;
        j += 2;
        if i == 3 || i == 5 || i == 7 || i == 9 {
            if b[j] != b'-' {
                return Err(Some(j));
            }
            j += 1;
        }
    }
    Ok(dst)
}

/// Decodes 32 contiguous hex digits starting at `start`.
fn decode_simple(b: &[u8], start: usize) -> Result<[u8; 16], Option<usize>> {
    let mut dst = [0u8; 16];
    for (i, e) in dst.iter_mut().enumerate() {
        *e = decode_pair(b, start + i * 2)?;
    }
    Ok(dst)
}

fn decode_pair(b: &[u8], at: usize) -> Result<u8, Option<usize>> {
    let hi = hex_value(b[at]).ok_or(Some(at))?;
    let lo = hex_value(b[at + 1]).ok_or(Some(at + 1))?;
    Ok((hi << 4) | lo)
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use crate::Error;

    const BYTES: [u8; 16] = [
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ];

    /// Decodes all five representations into the same bytes
    #[test]
    fn decodes_all_five_representations_into_the_same_bytes() {
        let cases = [
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6Ba7B8109dAd11D180b400C04fD430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "{6ba7b8109dad11d180b400c04fd430c8}",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "urn:uuid:6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
        ];

        for e in cases {
            assert_eq!(decode(e), Ok(BYTES), "{e}");
        }
    }

    /// Encodes in lower-case canonical form
    #[test]
    fn encodes_in_lower_case_canonical_form() {
        assert_eq!(&encode(&BYTES), b"6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(&encode(&[0; 16]), b"00000000-0000-0000-0000-000000000000");
        assert_eq!(&encode(&[0xff; 16]), b"ffffffff-ffff-ffff-ffff-ffffffffffff");
    }

    /// Decodes encoded bytes back
    #[test]
    fn decodes_encoded_bytes_back() {
        let mut bytes = [0u8; 16];
        for n in 0..=255u8 {
            for (i, e) in bytes.iter_mut().enumerate() {
                *e = n.wrapping_mul(i as u8 + 1).rotate_left(i as u32);
            }
            let text = encode(&bytes);
            assert_eq!(decode(std::str::from_utf8(&text).unwrap()), Ok(bytes));
        }
    }

    /// Reports offending character index
    #[test]
    fn reports_offending_character_index() {
        let cases = [
            ("6ba7b810-9dad-11d1-80b4-00c04fd430c", None),
            ("6ba7b810-9dad-11d1-80b4-00c04fd430c8 ", None),
            ("6ba7b810_9dad-11d1-80b4-00c04fd430c8", Some(8)),
            ("6ba7b810-9dad-11d1-80b4_00c04fd430c8", Some(23)),
            ("6ba7b8109-dad-11d1-80b4-00c04fd430c8", Some(8)),
            ("6ba7g810-9dad-11d1-80b4-00c04fd430c8", Some(4)),
            ("6ba7b810-9dad-11d1-80b4-00c04fd430cz", Some(35)),
            ("6ba7b8109dad11d180b400c04fd430c+", Some(31)),
            ("(6ba7b810-9dad-11d1-80b4-00c04fd430c8}", Some(0)),
            ("{6ba7b810-9dad-11d1-80b4-00c04fd430c8)", Some(37)),
            ("{6ba7b8109dad11d180b400c04fd430c8]", Some(33)),
            ("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430g8", Some(43)),
            ("URN:UUID:6ba7b810-9dad-11d1-80b4-00c04fd430c8", Some(0)),
            ("urn:uuid-6ba7b810-9dad-11d1-80b4-00c04fd430c8", Some(8)),
            ("urn:uuid:6ba7b8109dad11d180b400c04fd430c8----", Some(17)),
        ];

        for (text, index) in cases {
            assert_eq!(
                decode(text),
                Err(Error::Format {
                    src: text.into(),
                    index
                }),
                "{text}"
            );
        }
    }

    /// Rejects non-ASCII input without panicking
    #[test]
    fn rejects_non_ascii_input_without_panicking() {
        let cases = [
            "6ba7b810-9dad-11d1-80b4-00c04fd430\u{e9}",
            "\u{ff5b}6ba7b8109dad11d180b400c04fd430c\u{ff5d}",
            "6ba7b810-9dad-11d1-80b4-00c04fd43\u{2010}",
        ];
        for e in cases {
            assert!(decode(e).is_err(), "{e}");
        }
    }
}
