// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// The newline byte. It is the only line separator the engine knows about.
pub const LINE_FEED_BYTE: u8 = b'\n';

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x0010_FFFF;

/// Longest UTF-8 sequence in bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Why a byte sequence is not well-formed UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    /// A continuation byte (`10xxxxxx`) or a byte in `0xF8..=0xFF` where a sequence
    /// should start.
    InvalidLeadByte,
    /// A byte that should be a continuation byte isn't one.
    InvalidContinuation,
    /// The input ends in the middle of a sequence.
    Truncated,
    /// The value could have been encoded with fewer bytes.
    Overlong,
    /// The value is above `U+10FFFF`.
    OutOfRange,
    /// The value is a UTF-16 surrogate (`U+D800..=U+DFFF`).
    Surrogate,
}

impl Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let it = match self {
            Utf8ErrorKind::InvalidLeadByte => "invalid lead byte",
            Utf8ErrorKind::InvalidContinuation => "invalid continuation byte",
            Utf8ErrorKind::Truncated => "truncated sequence",
            Utf8ErrorKind::Overlong => "overlong encoding",
            Utf8ErrorKind::OutOfRange => "code point above U+10FFFF",
            Utf8ErrorKind::Surrogate => "surrogate code point",
        };
        f.write_str(it)
    }
}

/// Where (byte offset into the validated slice) and why validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error {
    pub byte_offset: usize,
    pub kind: Utf8ErrorKind,
}

impl Display for Utf8Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.byte_offset)
    }
}

impl std::error::Error for Utf8Error {}

/// One successfully decoded code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedCodePoint {
    pub value: char,
    /// Number of bytes consumed from the input.
    pub len: usize,
}

/// `true` for `10xxxxxx` bytes, which never start a sequence.
#[must_use]
#[inline]
pub const fn is_continuation_byte(byte: u8) -> bool { byte & 0xC0 == 0x80 }

/// Sequence length implied by a lead byte, or `None` if the byte can't start a
/// sequence.
#[must_use]
#[inline]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Sequence length for a lead byte of content that is already known to be valid. Used
/// to step over stored text without validating it again. A stray continuation byte
/// counts as 1 so a walk always makes progress.
#[must_use]
#[inline]
pub const fn lead_byte_len(lead: u8) -> usize {
    match sequence_len(lead) {
        Some(it) => it,
        None => 1,
    }
}

/// Decode the code point that starts at `bytes[0]`.
///
/// # Errors
///
/// Returns the [`Utf8ErrorKind`] of the failure. The error offset is always `0` since
/// the decoder only looks at one sequence; callers add their own base offset.
/// [`Utf8ErrorKind::Truncated`] is only reported when every byte present is a valid
/// prefix of a sequence, so a streaming caller can wait for more input.
pub fn decode_code_point(bytes: &[u8]) -> Result<DecodedCodePoint, Utf8ErrorKind> {
    let Some(&lead) = bytes.first() else {
        return Err(Utf8ErrorKind::Truncated);
    };

    let Some(len) = sequence_len(lead) else {
        return Err(Utf8ErrorKind::InvalidLeadByte);
    };

    if len == 1 {
        return Ok(DecodedCodePoint {
            value: char::from(lead),
            len,
        });
    }

    // Check the continuation bytes that are present before reporting truncation.
    let available = bytes.len().min(len);
    for &byte in &bytes[1..available] {
        if !is_continuation_byte(byte) {
            return Err(Utf8ErrorKind::InvalidContinuation);
        }
    }
    if available < len {
        return Err(Utf8ErrorKind::Truncated);
    }

    let (lead_bits, minimum) = match len {
        2 => (u32::from(lead & 0x1F), 0x80),
        3 => (u32::from(lead & 0x0F), 0x800),
        _ => (u32::from(lead & 0x07), 0x1_0000),
    };
    let value = bytes[1..len].iter().fold(lead_bits, |acc, &byte| {
        (acc << 6) | u32::from(byte & 0x3F)
    });

    if value < minimum {
        return Err(Utf8ErrorKind::Overlong);
    }
    if value > MAX_CODE_POINT {
        return Err(Utf8ErrorKind::OutOfRange);
    }
    match char::from_u32(value) {
        Some(it) => Ok(DecodedCodePoint { value: it, len }),
        None => Err(Utf8ErrorKind::Surrogate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"a", 'a', 1 ; "ascii")]
    #[test_case(b"\x7F", '\u{7F}', 1 ; "ascii max")]
    #[test_case("é".as_bytes(), 'é', 2 ; "two byte")]
    #[test_case("\u{80}".as_bytes(), '\u{80}', 2 ; "two byte min")]
    #[test_case("世".as_bytes(), '世', 3 ; "three byte")]
    #[test_case("\u{800}".as_bytes(), '\u{800}', 3 ; "three byte min")]
    #[test_case("😀".as_bytes(), '😀', 4 ; "four byte")]
    #[test_case("\u{10FFFF}".as_bytes(), '\u{10FFFF}', 4 ; "four byte max")]
    fn test_decode_valid(bytes: &[u8], expected: char, expected_len: usize) {
        let it = decode_code_point(bytes).unwrap();
        assert_eq!(it.value, expected);
        assert_eq!(it.len, expected_len);
    }

    #[test]
    fn test_decode_consumes_only_first_sequence() {
        let it = decode_code_point("éa".as_bytes()).unwrap();
        assert_eq!(it.len, 2);
    }

    #[test_case(b"", Utf8ErrorKind::Truncated ; "empty input")]
    #[test_case(b"\x80", Utf8ErrorKind::InvalidLeadByte ; "bare continuation")]
    #[test_case(b"\xF8\x88\x80\x80", Utf8ErrorKind::InvalidLeadByte ; "five byte lead")]
    #[test_case(b"\xFF", Utf8ErrorKind::InvalidLeadByte ; "ff")]
    #[test_case(b"\xC3", Utf8ErrorKind::Truncated ; "two byte truncated")]
    #[test_case(b"\xE4\xB8", Utf8ErrorKind::Truncated ; "three byte truncated")]
    #[test_case(b"\xC3\x41", Utf8ErrorKind::InvalidContinuation ; "ascii as continuation")]
    #[test_case(b"\xE4\x41", Utf8ErrorKind::InvalidContinuation ; "bad continuation before truncation")]
    #[test_case(b"\xC0\x80", Utf8ErrorKind::Overlong ; "overlong nul")]
    #[test_case(b"\xC1\xBF", Utf8ErrorKind::Overlong ; "overlong two byte")]
    #[test_case(b"\xE0\x80\xAF", Utf8ErrorKind::Overlong ; "overlong slash")]
    #[test_case(b"\xF0\x8F\xBF\xBF", Utf8ErrorKind::Overlong ; "overlong four byte")]
    #[test_case(b"\xF4\x90\x80\x80", Utf8ErrorKind::OutOfRange ; "above max")]
    #[test_case(b"\xF7\xBF\xBF\xBF", Utf8ErrorKind::OutOfRange ; "f7 lead")]
    #[test_case(b"\xED\xA0\x80", Utf8ErrorKind::Surrogate ; "high surrogate")]
    fn test_decode_invalid(bytes: &[u8], expected: Utf8ErrorKind) {
        assert_eq!(decode_code_point(bytes), Err(expected));
    }

    #[test]
    fn test_lead_byte_len() {
        assert_eq!(lead_byte_len(b'a'), 1);
        assert_eq!(lead_byte_len(0xC3), 2);
        assert_eq!(lead_byte_len(0xE4), 3);
        assert_eq!(lead_byte_len(0xF0), 4);
        assert_eq!(lead_byte_len(0x80), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Utf8Error {
            byte_offset: 3,
            kind: Utf8ErrorKind::Overlong,
        };
        assert_eq!(err.to_string(), "overlong encoding at byte 3");
    }
}
