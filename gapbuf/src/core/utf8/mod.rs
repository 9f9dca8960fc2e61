// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Strict UTF-8 codec used at every boundary where bytes enter a [`crate::GapBuffer`].
//!
//! The decoder classifies a sequence by its lead byte:
//!
//! | Lead byte     | Sequence length | Smallest legal value |
//! | :------------ | :-------------- | :------------------- |
//! | `0x00..=0x7F` | 1               | `U+0000`             |
//! | `0xC0..=0xDF` | 2               | `U+0080`             |
//! | `0xE0..=0xEF` | 3               | `U+0800`             |
//! | `0xF0..=0xF7` | 4               | `U+10000`            |
//!
//! Every continuation byte must look like `10xxxxxx`. Overlong encodings (a value
//! smaller than the minimum for its length), values above `U+10FFFF`, and UTF-16
//! surrogates are rejected. Rejecting surrogates keeps stored content a valid Rust
//! [`str`], so line views can be handed out as `&str` without copying.
//!
//! Once content is stored it is never validated again. Cursor movement steps over
//! stored content using only [`lead_byte_len()`] and [`is_continuation_byte()`].

// Attach sources.
pub mod codec;
pub mod validate;

// Re-export.
pub use codec::*;
pub use validate::*;
