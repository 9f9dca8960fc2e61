// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`SlotArena`] is defined here.

use super::{FreeList, SlotId};

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    payload: Option<T>,
}

/// Data structure to store reusable values in one growable block of slots, addressed
/// by [`SlotId`] instead of by reference.
///
/// 1. [Wikipedia definition of memory
///    arena](https://en.wikipedia.org/wiki/Region-based_memory_management)
///
/// Freed slots go on a free list and are handed out again (most recently freed first)
/// before the slot block grows. Lookups are `O(1)`, there is no scanning for a free
/// slot, and there is no global state: each owner keeps its own arena.
///
/// # Example
///
/// ```rust
/// use gapbuf::SlotArena;
///
/// let mut arena = SlotArena::<&str>::new();
/// let id = arena.insert("scratch");
/// assert_eq!(arena.get(id), Some(&"scratch"));
///
/// assert_eq!(arena.remove(id), Some("scratch"));
/// assert_eq!(arena.get(id), None);
///
/// // The slot is reused, the stale id stays dead.
/// let id_2 = arena.insert("notes");
/// assert_eq!(id_2.index, id.index);
/// assert_eq!(arena.get(id), None);
/// ```
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_list: FreeList,
    len: usize,
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self { Self::new() }
}

impl<T> SlotArena<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: FreeList::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: FreeList::new(),
            len: 0,
        }
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of slots ever allocated (live plus free).
    #[must_use]
    pub fn slot_count(&self) -> usize { self.slots.len() }

    /// Store `payload`, reusing a freed slot if there is one.
    pub fn insert(&mut self, payload: T) -> SlotId {
        self.len += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index];
            slot.payload = Some(payload);
            return SlotId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            payload: Some(payload),
        });
        SlotId {
            index,
            generation: 0,
        }
    }

    /// If `id` is stale or unknown, returns `None`.
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.payload.as_ref())
    }

    /// If `id` is stale or unknown, returns `None`.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.payload.as_mut())
    }

    #[must_use]
    pub fn contains(&self, id: SlotId) -> bool { self.get(id).is_some() }

    /// Take the value out and free its slot. If `id` is stale or unknown, returns `None`
    /// and nothing changes.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let payload = slot.payload.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.len -= 1;
        Some(payload)
    }

    /// Drop every value. Slots are kept for reuse, every outstanding id goes stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.payload.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(index);
        }
        self.len = 0;
    }

    /// Live values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.payload.as_ref().map(|payload| {
                (
                    SlotId {
                        index,
                        generation: slot.generation,
                    },
                    payload,
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_get() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(b), Some(&2));

        *arena.get_mut(b).unwrap() += 40;
        assert_eq!(arena.get(b), Some(&42));
    }

    #[test]
    fn test_remove_frees_slot_for_reuse() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let _b = arena.insert("b");

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));

        // Double remove is a no-op.
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 1);

        let c = arena.insert("c");
        assert_eq!(c.index, a.index);
        assert_ne!(c.generation, a.generation);
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&"c"));
    }

    #[test]
    fn test_unknown_id() {
        let mut arena = SlotArena::<u8>::new();
        let bogus = SlotId {
            index: 7,
            generation: 0,
        };
        assert_eq!(arena.get(bogus), None);
        assert_eq!(arena.remove(bogus), None);
    }

    #[test]
    fn test_clear_invalidates_ids_and_keeps_slots() {
        let mut arena = SlotArena::with_capacity(4);
        let ids: Vec<SlotId> = (0..4).map(|it| arena.insert(it)).collect();
        arena.clear();

        assert!(arena.is_empty());
        assert!(ids.iter().all(|id| !arena.contains(*id)));

        // Slots are reused lowest index first after a clear.
        let id = arena.insert(99);
        assert_eq!(id.index, 0);
        assert_eq!(arena.slot_count(), 4);
    }

    #[test]
    fn test_iter_skips_free_slots() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);

        let items: Vec<(SlotId, char)> = arena.iter().map(|(id, it)| (id, *it)).collect();
        assert_eq!(items, vec![(a, 'a'), (c, 'c')]);
    }
}
