// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::GapBuffer;
use crate::{LINE_FEED_BYTE, utf8::lead_byte_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl GapBuffer {
    /// Move the cursor to the previous or next line, as close to
    /// [`Self::target_column()`] as that line allows. The target column is left alone,
    /// so passing through a short line doesn't lose it.
    ///
    /// Returns `false` (and does nothing) if there is no line in that direction.
    pub fn move_vertical(&mut self, direction: VerticalDirection) -> bool {
        let cursor = self.gap_offset;

        let line_start = match direction {
            VerticalDirection::Up => {
                let current_line_start = self.line_start_before(cursor);
                if current_line_start == 0 {
                    return false;
                }
                self.line_start_before(current_line_start - 1)
            }
            VerticalDirection::Down => {
                let current_line_end = self.line_end_after(cursor);
                if current_line_end >= self.byte_count() {
                    return false;
                }
                current_line_end + 1
            }
        };

        let (target, column) = self.advance_within_line(line_start, self.column_target);
        self.move_gap_to(target);
        self.column_current = column;
        true
    }

    /// Walk up to `columns` code points from `line_start`, stopping at the end of the
    /// line. Returns the offset reached and the code points walked.
    fn advance_within_line(&self, line_start: usize, columns: usize) -> (usize, usize) {
        let mut offset = line_start;
        let mut walked = 0;
        while walked < columns {
            match self.byte_at(offset) {
                Some(byte) if byte != LINE_FEED_BYTE => {
                    offset += lead_byte_len(byte);
                    walked += 1;
                }
                _ => break,
            }
        }
        (offset, walked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sticky_column_through_short_line() {
        let mut buffer = GapBuffer::new(64).unwrap();
        buffer.insert_str("0123456789\nabc\nABCDEFGHIJ").unwrap();
        buffer.move_absolute(7);
        assert_eq!(buffer.current_column(), 7);

        assert!(buffer.move_vertical(VerticalDirection::Down));
        assert_eq!(buffer.current_column(), 3);
        assert_eq!(buffer.target_column(), 7);
        assert_eq!(buffer.cursor_byte_offset(), 14);

        assert!(buffer.move_vertical(VerticalDirection::Down));
        assert_eq!(buffer.current_column(), 7);
        assert_eq!(buffer.cursor_byte_offset(), 22);

        assert!(!buffer.move_vertical(VerticalDirection::Down));

        assert!(buffer.move_vertical(VerticalDirection::Up));
        assert!(buffer.move_vertical(VerticalDirection::Up));
        assert_eq!(buffer.cursor_byte_offset(), 7);
        assert_eq!(buffer.current_column(), 7);

        assert!(!buffer.move_vertical(VerticalDirection::Up));
        assert_eq!(buffer.cursor_byte_offset(), 7);
    }

    #[test]
    fn test_vertical_counts_code_points_not_bytes() {
        let mut buffer = GapBuffer::new(64).unwrap();
        buffer.insert_str("héllo\n世界世界").unwrap();
        buffer.move_relative(-1);
        assert_eq!(buffer.current_column(), 3);

        assert!(buffer.move_vertical(VerticalDirection::Up));
        assert_eq!(buffer.current_column(), 3);
        assert_eq!(buffer.before_gap(), "hél".as_bytes());
    }

    #[test]
    fn test_edit_after_vertical_move_resets_target() {
        let mut buffer = GapBuffer::new(64).unwrap();
        buffer.insert_str("long line\nab\nlong line").unwrap();
        buffer.move_absolute(8);
        buffer.move_vertical(VerticalDirection::Down);
        assert_eq!(buffer.target_column(), 8);

        buffer.insert_code_point('c').unwrap();
        assert_eq!(buffer.current_column(), 3);
        assert_eq!(buffer.target_column(), 3);

        buffer.move_vertical(VerticalDirection::Down);
        assert_eq!(buffer.current_column(), 3);
    }

    #[test]
    fn test_down_onto_empty_last_line() {
        let mut buffer = GapBuffer::new(16).unwrap();
        buffer.insert_str("abc\n").unwrap();
        buffer.move_absolute(2);

        assert!(buffer.move_vertical(VerticalDirection::Down));
        assert_eq!(buffer.cursor_byte_offset(), 4);
        assert_eq!(buffer.current_column(), 0);
        assert_eq!(buffer.target_column(), 2);
    }
}
