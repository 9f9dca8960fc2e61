// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type aliases and ids to improve code readability.

use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

/// Handle to a value stored in a [`super::SlotArena`].
///
/// The generation makes a handle go stale once its slot is freed, so a handle that
/// outlives its value can't be used to reach whatever reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub index: usize,
    pub generation: u32,
}

impl Display for SlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Free slot indices, most recently freed last. Small arenas never spill to the heap.
pub type FreeList = SmallVec<[usize; FREE_LIST_INLINE_CAPACITY]>;

pub const FREE_LIST_INLINE_CAPACITY: usize = 8;
