// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks that the [`crate::GapBuffer`] engine (and its owners) lean on:
//! error types, logging setup, the UTF-8 codec, the slot arena, and temp dir helpers.

// Attach sources.
pub mod arena;
pub mod common;
pub mod fs;
pub mod log;
pub mod utf8;

// Re-export.
pub use arena::*;
pub use common::*;
pub use fs::*;
pub use log::*;
pub use utf8::{LINE_FEED_BYTE, Utf8Error, Utf8ErrorKind};
