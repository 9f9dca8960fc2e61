// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Horizontal cursor movement. Moving the cursor means moving the gap: the text
//! between the old and the new cursor position is copied across the gap.
//!
//! ```text
//! move_relative(-2) on "abcd|" (| is the gap):
//!
//! [a b c d _ _ _ _]  ->  [a b _ _ _ _ c d]
//!          ^ gap_offset       ^ gap_offset
//! ```

use super::{DEBUG_GAP_BUFFER, GapBuffer};
use crate::utf8::{is_continuation_byte, lead_byte_len};

impl GapBuffer {
    /// Move the cursor by `delta` code points, negative for left. Stops at either end
    /// of the text.
    ///
    /// Returns how many code points the cursor actually moved.
    pub fn move_relative(&mut self, delta: isize) -> usize {
        let steps = delta.unsigned_abs();
        let (target, moved) = if delta >= 0 {
            let (bytes, moved) = self.forward_span(steps);
            (self.gap_offset + bytes, moved)
        } else {
            let (bytes, moved) = self.backward_span(steps);
            (self.gap_offset - bytes, moved)
        };
        self.move_gap_to(target);
        self.refresh_columns();
        moved
    }

    /// Move the cursor in front of the code point at `index`. An index past the end
    /// puts the cursor at the end.
    ///
    /// Returns the code point index the cursor landed on.
    pub fn move_absolute(&mut self, index: usize) -> usize {
        let target = self.byte_offset_of_code_point(index);
        self.move_gap_to(target);
        self.refresh_columns();
        self.cursor_code_point_index()
    }

    /// Move the cursor to logical byte `offset`. An offset inside a multi-byte sequence
    /// snaps back to the start of that code point, and an offset past the end puts the
    /// cursor at the end.
    ///
    /// Returns the byte offset the cursor landed on.
    pub fn move_absolute_raw(&mut self, offset: usize) -> usize {
        let mut target = offset.min(self.byte_count());
        while target > 0
            && self
                .byte_at(target)
                .is_some_and(is_continuation_byte)
        {
            target -= 1;
        }
        self.move_gap_to(target);
        self.refresh_columns();
        target
    }

    /// Logical byte offset of the code point at `index`, or the byte count if there are
    /// not that many code points.
    #[must_use]
    pub fn byte_offset_of_code_point(&self, index: usize) -> usize {
        self.before_gap()
            .iter()
            .chain(self.after_gap())
            .enumerate()
            .filter(|(_, byte)| !is_continuation_byte(**byte))
            .nth(index)
            .map_or(self.byte_count(), |(offset, _)| offset)
    }

    /// Bytes spanned by up to `steps` code points after the cursor, and how many code
    /// points that is.
    pub(crate) fn forward_span(&self, steps: usize) -> (usize, usize) {
        let after = self.after_gap();
        let mut bytes = 0;
        let mut moved = 0;
        while moved < steps && bytes < after.len() {
            bytes += lead_byte_len(after[bytes]);
            moved += 1;
        }
        (bytes.min(after.len()), moved)
    }

    /// Bytes spanned by up to `steps` code points before the cursor, and how many code
    /// points that is.
    pub(crate) fn backward_span(&self, steps: usize) -> (usize, usize) {
        let before = self.before_gap();
        let mut start = before.len();
        let mut moved = 0;
        while moved < steps && start > 0 {
            start -= 1;
            while start > 0 && is_continuation_byte(before[start]) {
                start -= 1;
            }
            moved += 1;
        }
        (before.len() - start, moved)
    }

    /// Slide the gap so it starts at logical byte `target`, which must be a code point
    /// boundary no greater than [`Self::byte_count()`].
    pub(crate) fn move_gap_to(&mut self, target: usize) {
        let gap_offset = self.gap_offset;
        let gap_length = self.gap_length;

        if target < gap_offset {
            // Text between target and cursor goes to the back of the gap.
            self.data.copy_within(target..gap_offset, target + gap_length);
        } else if target > gap_offset {
            // Text after the gap comes to the front of it.
            let gap_end = gap_offset + gap_length;
            let count = target - gap_offset;
            self.data.copy_within(gap_end..gap_end + count, gap_offset);
        } else {
            return;
        }

        self.gap_offset = target;

        DEBUG_GAP_BUFFER.then(|| {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "GapBuffer -> move_gap_to",
                from = %gap_offset,
                to = %target,
            );
        });
    }

    /// Recompute the cursor column and make it the new target. Called after every
    /// horizontal move and edit.
    pub(crate) fn refresh_columns(&mut self) {
        self.column_current = self.column_at(self.gap_offset);
        self.column_target = self.column_current;
    }
}
