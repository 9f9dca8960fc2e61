// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Inserts at the cursor, on either side of the gap.
//!
//! This is the validation boundary: bytes are checked with [`validate()`] before
//! anything is written, so the rest of the engine can step over stored text by lead
//! byte alone. [`GapBuffer::insert_str()`] and [`GapBuffer::insert_code_point()`] take
//! types that are valid UTF-8 already and skip that check.

use super::GapBuffer;
use crate::{GapBufferError, GapBufferResult, LINE_FEED_BYTE,
            utf8::{count_code_points, validate}};

impl GapBuffer {
    /// Write `bytes` at the cursor and move the cursor past them.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::InvalidUtf8`] if `bytes` is not well-formed UTF-8.
    /// - [`GapBufferError::CapacityExceeded`] if the gap is shorter than `bytes`.
    ///
    /// Either way nothing is written.
    pub fn insert_before(&mut self, bytes: &[u8]) -> GapBufferResult<()> {
        let code_points = validate(bytes)?;
        self.insert_validated(bytes, code_points)
    }

    /// Same as [`Self::insert_before()`] for text that is known to be valid.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::CapacityExceeded`] if the gap is shorter than `text`.
    pub fn insert_str(&mut self, text: &str) -> GapBufferResult<()> {
        self.insert_validated(text.as_bytes(), text.chars().count())
    }

    /// Encode `code_point` and insert it at the cursor.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::CapacityExceeded`] if the gap is too short for its encoding.
    pub fn insert_code_point(&mut self, code_point: char) -> GapBufferResult<()> {
        let mut encoded = [0; 4];
        self.insert_str(code_point.encode_utf8(&mut encoded))
    }

    /// Write `bytes` at the far end of the gap, right after the cursor. The cursor does
    /// not move.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert_before()`].
    pub fn insert_after(&mut self, bytes: &[u8]) -> GapBufferResult<()> {
        validate(bytes)?;
        self.check_gap_fits(bytes.len())?;
        let gap_end = self.gap_end();
        self.data[gap_end - bytes.len()..gap_end].copy_from_slice(bytes);
        self.gap_length -= bytes.len();
        Ok(())
    }

    /// `code_points` must be the number of code points in `bytes`.
    pub(crate) fn insert_validated(
        &mut self,
        bytes: &[u8],
        code_points: usize,
    ) -> GapBufferResult<()> {
        self.check_gap_fits(bytes.len())?;

        self.data[self.gap_offset..self.gap_offset + bytes.len()].copy_from_slice(bytes);
        self.gap_offset += bytes.len();
        self.gap_length -= bytes.len();

        self.column_current = match bytes.iter().rposition(|&it| it == LINE_FEED_BYTE) {
            Some(last_line_feed) => count_code_points(&bytes[last_line_feed + 1..]),
            None => self.column_current + code_points,
        };
        self.column_target = self.column_current;
        Ok(())
    }

    fn check_gap_fits(&self, requested: usize) -> GapBufferResult<()> {
        if requested > self.gap_length {
            return Err(GapBufferError::CapacityExceeded {
                requested,
                available: self.gap_length,
            });
        }
        Ok(())
    }
}
