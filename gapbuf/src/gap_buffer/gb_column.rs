// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Column and line boundary lookups. These read the text as if the gap weren't there
//! and never move the cursor.

use super::GapBuffer;
use crate::{LINE_FEED_BYTE, utf8::is_continuation_byte};

impl GapBuffer {
    /// Code points between the start of the line that contains logical byte
    /// `byte_offset` and `byte_offset` itself. Offsets past the end are clamped.
    ///
    /// [`Self::current_column()`] is this value at the cursor, kept up to date by every
    /// operation instead of being recomputed on each read.
    #[must_use]
    pub fn column_at(&self, byte_offset: usize) -> usize {
        self.bytes_before(byte_offset)
            .take_while(|&&it| it != LINE_FEED_BYTE)
            .filter(|&&it| !is_continuation_byte(it))
            .count()
    }

    /// Logical byte offset where the line containing `byte_offset` starts.
    #[must_use]
    pub fn line_start_before(&self, byte_offset: usize) -> usize {
        let byte_offset = byte_offset.min(self.byte_count());
        byte_offset
            - self
                .bytes_before(byte_offset)
                .take_while(|&&it| it != LINE_FEED_BYTE)
                .count()
    }

    /// Logical byte offset of the line feed that ends the line containing
    /// `byte_offset`, or the byte count if that line is the last one.
    #[must_use]
    pub fn line_end_after(&self, byte_offset: usize) -> usize {
        let byte_offset = byte_offset.min(self.byte_count());
        byte_offset
            + self
                .bytes_from(byte_offset)
                .take_while(|&&it| it != LINE_FEED_BYTE)
                .count()
    }

    /// Logical bytes in `[0, byte_offset)`, nearest first.
    fn bytes_before(&self, byte_offset: usize) -> impl Iterator<Item = &u8> {
        let byte_offset = byte_offset.min(self.byte_count());
        let (before, after) = (self.before_gap(), self.after_gap());
        let before_end = byte_offset.min(before.len());
        let after_end = byte_offset.saturating_sub(before.len());
        after[..after_end]
            .iter()
            .rev()
            .chain(before[..before_end].iter().rev())
    }

    /// Logical bytes in `[byte_offset, byte_count)`, nearest first.
    fn bytes_from(&self, byte_offset: usize) -> impl Iterator<Item = &u8> {
        let (before, after) = (self.before_gap(), self.after_gap());
        let before_start = byte_offset.min(before.len());
        let after_start = byte_offset.saturating_sub(before.len()).min(after.len());
        before[before_start..].iter().chain(after[after_start..].iter())
    }
}
