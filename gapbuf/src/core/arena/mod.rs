// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index based memory arena. See [`SlotArena`].

// Attach sources.
pub mod arena_types;
pub mod slot_arena;

// Re-export.
pub use arena_types::*;
pub use slot_arena::*;
