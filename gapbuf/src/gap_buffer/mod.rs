// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single gap buffer over one contiguous, caller owned block of bytes.
//!
//! # Storage layout
//!
//! The block is split into three regions. Only the first and last hold text, and
//! their concatenation is the logical content of the buffer:
//!
//! ```text
//! ┌──────────────────────┬─────────────────────┬───────────────────────┐
//! │ text before cursor   │ gap (unused)        │ text after cursor     │
//! └──────────────────────┴─────────────────────┴───────────────────────┘
//! 0                      gap_offset            gap_offset + gap_length  capacity
//! ```
//!
//! `gap_offset + gap_length <= capacity` holds after every operation, and the stored
//! text is always well-formed UTF-8 since every byte that enters goes through
//! [`crate::utf8::validate()`] first. A rejected operation leaves the buffer exactly as
//! it was.
//!
//! # Module layout
//!
//! [`GapBuffer`] is one concrete type. Its inherent methods are spread over focused
//! files:
//! - `gb_core` - construction, drop, clone, accessors.
//! - `gb_insert_ops` / `gb_delete_ops` - edits at the cursor.
//! - `gb_cursor_ops` - horizontal movement by code point or raw byte offset.
//! - `gb_column` / `gb_vertical_ops` - column tracking and sticky column up / down.
//! - `gb_line` - the lazy line iterator ([`GapBufferIter`], [`GapBufferLine`]).
//! - `gb_relocate_ops` - growth on demand ([`GapBuffer::insert_maybe_relocate()`]).
//! - `gb_file_io` - chunked load and save.
//!
//! # Columns
//!
//! Columns count code points from the start of the line. `current_column()` is where
//! the cursor is, `target_column()` is where a vertical move wants it to be. Moving down
//! from column 7 through a 3 code point line and on to a long line lands at column 7
//! again, since only horizontal moves, inserts, and deletes reset the target.

// Attach sources.
pub mod gb_column;
pub mod gb_config;
pub mod gb_core;
pub mod gb_cursor_ops;
pub mod gb_delete_ops;
pub mod gb_file_io;
pub mod gb_insert_ops;
pub mod gb_line;
pub mod gb_relocate_ops;
pub mod gb_vertical_ops;

// Re-export.
pub use gb_config::*;
pub use gb_core::*;
pub use gb_line::*;
pub use gb_vertical_ops::*;

/// Log gap moves, relocations, and file I/O.
pub const DEBUG_GAP_BUFFER: bool = true;

/// Smallest block a [`GapBuffer`] accepts: room for one code point of any length.
pub const MIN_CAPACITY: usize = crate::utf8::MAX_SEQUENCE_LEN;
