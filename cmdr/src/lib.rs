// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gapbuf-cmdr
//!
//! `gbx` is a small command line front end for the [`gapbuf`] engine. It is not an
//! editor: it loads files into gap buffers, reports on them, and writes them back out,
//! which exercises the engine's public API end to end.
//!
//! ```text
//! gbx stats notes.md todo.md        bytes, code points, and lines per file
//! gbx lines notes.md --cursor 40    numbered lines, as the engine segments them
//! gbx copy a.md b.md --cursor 3 --insert "hello"
//! ```
//!
//! Global options:
//! - `--enable-logging` / `-l` - write a debug log to `gbx.log`.
//! - `--chunk-size <bytes>` - read size for file loads.
//! - `--growth-policy exact|doubling` - how buffers grow when an insert doesn't fit.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod gbx;

// Re-export.
pub use gbx::*;
