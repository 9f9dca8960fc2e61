// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gapbuf
//!
//! A UTF-8 validating gap buffer: the text storage engine behind an editor view.
//!
//! The buffer owns one contiguous block of bytes. Text before the cursor lives at the
//! front of the block, text after the cursor lives at the back, and the unused space
//! (the "gap") sits between them, right at the cursor. Typing writes into the gap,
//! deleting widens it, and moving the cursor slides text across it. Edits near the
//! cursor are therefore cheap no matter how large the document is.
//!
//! ```text
//! data: [---text before cursor---][======gap======][---text after cursor---]
//!        0                 gap_offset    gap_offset + gap_length          total
//! ```
//!
//! # What you get
//!
//! - [`GapBuffer`] - fixed capacity storage with insert, remove, cursor moves by code
//!   point, sticky column vertical moves, and accessors.
//! - [`GapBuffer::lines()`] - a lazy line iterator that is transparent to the gap. A
//!   line that straddles the gap is handed out as two spans instead of being copied
//!   into a bounded scratch area, so long lines are never truncated.
//! - [`GapBuffer::insert_maybe_relocate()`] - the growable wrapper that swaps in a
//!   larger block when the gap runs out.
//! - [`GapBuffer::insert_file()`], [`GapBuffer::load_from_file()`] and
//!   [`GapBuffer::save_to()`] - whole file I/O with UTF-8 validation across read
//!   chunk boundaries.
//! - [`utf8`] - the strict decoder used to validate everything that enters a buffer.
//! - [`SlotArena`] - an index based arena with a free list for owners of many buffers.
//!
//! # UTF-8 safety
//!
//! Content is validated once, at the boundary where it enters the buffer. Invalid
//! input is rejected and the buffer is left untouched. Stored content is therefore
//! always valid, which lets cursor movement step over code points using only the lead
//! byte of each sequence.
//!
//! # Example
//!
//! ```rust
//! use gapbuf::{GapBuffer, VerticalDirection};
//!
//! let mut buffer = GapBuffer::new(64).unwrap();
//! buffer.insert_str("héllo\nworld").unwrap();
//! buffer.move_relative(-3);
//! assert_eq!(buffer.current_column(), 2);
//!
//! buffer.move_vertical(VerticalDirection::Up);
//! assert_eq!(buffer.cursor_byte_offset(), 3); // Just after "hé".
//!
//! let lines: Vec<String> = buffer.lines().map(|it| it.to_string()).collect();
//! assert_eq!(lines, vec!["héllo", "world"]);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod gap_buffer;

// Re-export.
pub use core::*;
pub use gap_buffer::*;
