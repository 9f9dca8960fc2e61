// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`GapBufferIter`] and [`GapBufferLine`] - lazy, gap transparent line segmentation.
//!
//! Lines are split on `\n`, which is not part of the line. A line that starts before
//! the gap and ends after it is handed out as two spans, so nothing is copied and no
//! line is ever cut short:
//!
//! ```text
//! "abc\ndef" with the cursor at byte 2:
//!
//! [a b _ _ _ _ c \n d e f]
//!  └─┘         └┘
//!  first       second      -> line 0 is split: "ab" + "c"
//!                 └───┘    -> line 1 is contiguous: "def"
//! ```
//!
//! End rules: an empty buffer has no lines, a trailing `\n` does not start an extra
//! empty line, and a last line without a `\n` is still a line.

use std::{borrow::Cow,
          fmt::{Display, Formatter},
          iter::FusedIterator};

use super::GapBuffer;
use crate::{LINE_FEED_BYTE, utf8::count_code_points};

/// One line of a [`GapBuffer`], borrowed from it.
///
/// Each span on its own is valid UTF-8, since the gap always sits on a code point
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapBufferLine<'a> {
    first: &'a [u8],
    second: &'a [u8],
    split: bool,
}

impl<'a> GapBufferLine<'a> {
    /// Either span may be empty. The line is only split when both hold text.
    #[must_use]
    pub fn new(first: &'a [u8], second: &'a [u8]) -> Self {
        match (first.is_empty(), second.is_empty()) {
            (false, false) => Self {
                first,
                second,
                split: true,
            },
            (true, _) => Self {
                first: second,
                second: &[],
                split: false,
            },
            (false, true) => Self {
                first,
                second: &[],
                split: false,
            },
        }
    }

    /// `true` if the line straddles the gap.
    #[must_use]
    pub fn is_split(&self) -> bool { self.split }

    /// The text before and after the gap. The second span is empty unless the line is
    /// split.
    #[must_use]
    pub fn spans(&self) -> (&'a [u8], &'a [u8]) { (self.first, self.second) }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.first.len() + self.second.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn code_point_count(&self) -> usize {
        count_code_points(self.first) + count_code_points(self.second)
    }

    /// Stream the line's bytes in order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + 'a {
        self.first.iter().chain(self.second).copied()
    }

    /// Borrowed for a contiguous line, owned for a split one.
    #[must_use]
    pub fn to_cow(&self) -> Cow<'a, str> {
        if !self.split {
            return String::from_utf8_lossy(self.first);
        }
        let mut it = String::with_capacity(self.len());
        it.push_str(&String::from_utf8_lossy(self.first));
        it.push_str(&String::from_utf8_lossy(self.second));
        Cow::Owned(it)
    }
}

impl Display for GapBufferLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            String::from_utf8_lossy(self.first),
            String::from_utf8_lossy(self.second)
        )
    }
}

/// Forward only iterator over the lines of a [`GapBuffer`]. Get one from
/// [`GapBuffer::lines()`]. It borrows the buffer, so the buffer can't change while
/// lines are being read.
#[derive(Debug, Clone)]
pub struct GapBufferIter<'a> {
    before: &'a [u8],
    after: &'a [u8],
    /// Logical byte offset where the next line starts.
    position: usize,
}

impl<'a> GapBufferIter<'a> {
    #[must_use]
    pub fn new(buffer: &'a GapBuffer) -> Self {
        Self {
            before: buffer.before_gap(),
            after: buffer.after_gap(),
            position: 0,
        }
    }

    fn total(&self) -> usize { self.before.len() + self.after.len() }

    /// Find the end of the line in `span`, starting at `start`. Returns the line's text
    /// and whether a line feed ended it.
    fn scan(span: &'a [u8], start: usize) -> (&'a [u8], bool) {
        let rest = &span[start..];
        match rest.iter().position(|&it| it == LINE_FEED_BYTE) {
            Some(end) => (&rest[..end], true),
            None => (rest, false),
        }
    }
}

impl<'a> Iterator for GapBufferIter<'a> {
    type Item = GapBufferLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.total();
        if self.position >= total {
            return None;
        }

        let before_len = self.before.len();

        // Line starts after the gap, it can't be split.
        if self.position >= before_len {
            let (line, terminated) = Self::scan(self.after, self.position - before_len);
            self.position += line.len() + usize::from(terminated);
            return Some(GapBufferLine::new(line, &[]));
        }

        let (first, terminated) = Self::scan(self.before, self.position);
        if terminated {
            self.position += first.len() + 1;
            return Some(GapBufferLine::new(first, &[]));
        }

        // Cross the gap.
        let (second, terminated) = Self::scan(self.after, 0);
        self.position = before_len + second.len() + usize::from(terminated);
        Some(GapBufferLine::new(first, second))
    }
}

impl FusedIterator for GapBufferIter<'_> {}

impl GapBuffer {
    /// Lines of the text, see [`GapBufferIter`].
    #[must_use]
    pub fn lines(&self) -> GapBufferIter<'_> { GapBufferIter::new(self) }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines().count() }
}
