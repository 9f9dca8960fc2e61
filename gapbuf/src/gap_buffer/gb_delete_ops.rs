// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deletes at the cursor. Nothing is copied: the gap just grows over the removed code
//! points, so stored text stays valid UTF-8 without any checks.

use super::GapBuffer;

impl GapBuffer {
    /// Delete up to `count` code points after the cursor (like the `Delete` key).
    ///
    /// Returns the number of bytes removed.
    pub fn remove_forward(&mut self, count: usize) -> usize {
        let (bytes, _) = self.forward_span(count);
        self.gap_length += bytes;
        self.column_target = self.column_current;
        bytes
    }

    /// Delete up to `count` code points before the cursor (like the `Backspace` key).
    ///
    /// Returns the number of bytes removed.
    pub fn remove_backward(&mut self, count: usize) -> usize {
        let (bytes, _) = self.backward_span(count);
        self.gap_offset -= bytes;
        self.gap_length += bytes;
        self.refresh_columns();
        bytes
    }
}
