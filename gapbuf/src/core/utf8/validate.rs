// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole slice validation and boundary helpers built on [`super::decode_code_point()`].

use super::{Utf8Error, Utf8ErrorKind, decode_code_point, is_continuation_byte};

/// Validate every sequence in `bytes`.
///
/// Returns the number of code points on success.
///
/// # Errors
///
/// Returns the offset and kind of the first malformed sequence. A sequence cut off by
/// the end of the slice is [`Utf8ErrorKind::Truncated`].
pub fn validate(bytes: &[u8]) -> Result<usize, Utf8Error> {
    let mut offset = 0;
    let mut code_points = 0;
    while offset < bytes.len() {
        // ASCII fast path.
        if bytes[offset].is_ascii() {
            offset += 1;
            code_points += 1;
            continue;
        }
        let decoded = decode_code_point(&bytes[offset..]).map_err(|kind| Utf8Error {
            byte_offset: offset,
            kind,
        })?;
        offset += decoded.len;
        code_points += 1;
    }
    Ok(code_points)
}

/// Length of the longest prefix of `bytes` that ends on a code point boundary, for a
/// caller that reads input in chunks. A trailing sequence that is merely incomplete is
/// left out of the prefix so it can be completed by the next chunk.
///
/// # Errors
///
/// Returns an error for anything that is malformed rather than incomplete.
pub fn complete_prefix_len(bytes: &[u8]) -> Result<usize, Utf8Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        if bytes[offset].is_ascii() {
            offset += 1;
            continue;
        }
        match decode_code_point(&bytes[offset..]) {
            Ok(decoded) => offset += decoded.len,
            Err(Utf8ErrorKind::Truncated) => return Ok(offset),
            Err(kind) => {
                return Err(Utf8Error {
                    byte_offset: offset,
                    kind,
                });
            }
        }
    }
    Ok(offset)
}

/// Number of code points in content that is already known to be valid.
#[must_use]
pub fn count_code_points(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&it| !is_continuation_byte(it)).count()
}
