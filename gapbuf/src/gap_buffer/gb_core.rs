// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`GapBuffer`] struct, its lifecycle, and read only accessors.

use std::{borrow::Cow,
          fmt::{Debug, Display, Formatter}};

use super::MIN_CAPACITY;
use crate::{GapBufferError, GapBufferResult, utf8::count_code_points};

/// Called with the memory block when the [`GapBuffer`] that owns it is dropped.
pub type Deallocator = Box<dyn FnOnce(Box<[u8]>)>;

/// Editable UTF-8 text in one block of memory with a movable gap at the cursor.
///
/// See the [module docs](super) for the storage layout.
///
/// # Example
///
/// ```rust
/// use gapbuf::GapBuffer;
///
/// let mut buffer = GapBuffer::new(32).unwrap();
/// buffer.insert_str("hello").unwrap();
/// buffer.move_absolute(0);
/// buffer.insert_str("> ").unwrap();
///
/// assert_eq!(buffer.to_string(), "> hello");
/// assert_eq!(buffer.cursor_byte_offset(), 2);
/// assert_eq!(buffer.gap_length(), 32 - 7);
/// ```
pub struct GapBuffer {
    pub(crate) data: Box<[u8]>,
    pub(crate) gap_offset: usize,
    pub(crate) gap_length: usize,
    pub(crate) column_current: usize,
    pub(crate) column_target: usize,
    deallocator: Option<Deallocator>,
}

impl GapBuffer {
    /// Allocate a block of `capacity` bytes, all of it gap.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::AllocationFailure`] if `capacity` is below [`MIN_CAPACITY`], or
    /// more than the allocator can supply.
    pub fn new(capacity: usize) -> GapBufferResult<Self> {
        if capacity < MIN_CAPACITY {
            return Err(GapBufferError::AllocationFailure {
                provided: capacity,
                minimum: MIN_CAPACITY,
            });
        }
        Ok(Self::from_parts(try_allocate_block(capacity)?, None))
    }

    /// Adopt a caller supplied block. Whatever it holds is treated as gap. The
    /// `deallocator` gets the block back when the buffer is dropped.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::AllocationFailure`] if the block is shorter than
    /// [`MIN_CAPACITY`]. The block is handed to `deallocator` before returning.
    pub fn from_memory(
        memory: Box<[u8]>,
        deallocator: impl FnOnce(Box<[u8]>) + 'static,
    ) -> GapBufferResult<Self> {
        let provided = memory.len();
        if provided < MIN_CAPACITY {
            deallocator(memory);
            return Err(GapBufferError::AllocationFailure {
                provided,
                minimum: MIN_CAPACITY,
            });
        }
        Ok(Self::from_parts(memory, Some(Box::new(deallocator))))
    }

    fn from_parts(data: Box<[u8]>, deallocator: Option<Deallocator>) -> Self {
        let gap_length = data.len();
        Self {
            data,
            gap_offset: 0,
            gap_length,
            column_current: 0,
            column_target: 0,
            deallocator,
        }
    }

    /// Copy the content into a fresh block of `capacity` bytes. The cursor and both
    /// columns carry over. The copy has no deallocator.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::AllocationFailure`] if a block of `capacity` bytes can't be
    ///   had, see [`Self::new()`].
    /// - [`GapBufferError::CapacityExceeded`] if the content doesn't fit.
    pub fn try_clone_with_capacity(&self, capacity: usize) -> GapBufferResult<Self> {
        let mut it = Self::new(capacity)?;
        let requested = self.byte_count();
        if requested > it.capacity() {
            return Err(GapBufferError::CapacityExceeded {
                requested,
                available: it.capacity(),
            });
        }
        it.insert_after(self.after_gap())?;
        it.insert_before(self.before_gap())?;
        it.column_current = self.column_current;
        it.column_target = self.column_target;
        Ok(it)
    }

    /// Empty the buffer. The block is kept.
    pub fn wipe(&mut self) {
        self.gap_offset = 0;
        self.gap_length = self.data.len();
        self.column_current = 0;
        self.column_target = 0;
    }

    /// Size of the memory block.
    #[must_use]
    pub fn capacity(&self) -> usize { self.data.len() }

    /// Bytes of text, the gap excluded.
    #[must_use]
    pub fn byte_count(&self) -> usize { self.data.len() - self.gap_length }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.byte_count() == 0 }

    /// Bytes left for inserts before the buffer has to relocate.
    #[must_use]
    pub fn gap_length(&self) -> usize { self.gap_length }

    /// Logical byte offset of the cursor, which is also where the gap starts.
    #[must_use]
    pub fn cursor_byte_offset(&self) -> usize { self.gap_offset }

    /// Code points between the start of the cursor's line and the cursor.
    #[must_use]
    pub fn current_column(&self) -> usize { self.column_current }

    /// Column that vertical moves aim for.
    #[must_use]
    pub fn target_column(&self) -> usize { self.column_target }

    #[must_use]
    pub fn code_point_count(&self) -> usize {
        count_code_points(self.before_gap()) + count_code_points(self.after_gap())
    }

    /// Code point index of the cursor in the whole text.
    #[must_use]
    pub fn cursor_code_point_index(&self) -> usize { count_code_points(self.before_gap()) }

    /// Text before the cursor.
    #[must_use]
    pub fn before_gap(&self) -> &[u8] { &self.data[..self.gap_offset] }

    /// Text after the cursor.
    #[must_use]
    pub fn after_gap(&self) -> &[u8] { &self.data[self.gap_end()..] }

    pub(crate) fn gap_end(&self) -> usize { self.gap_offset + self.gap_length }

    /// Byte at logical `index`, as if the gap weren't there.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        if index < self.gap_offset {
            Some(self.data[index])
        } else {
            self.data.get(index + self.gap_length).copied()
        }
    }

    /// The whole text. Borrowed when one of the two regions is empty.
    #[must_use]
    pub fn to_cow(&self) -> Cow<'_, str> {
        match (self.before_gap(), self.after_gap()) {
            (before, []) => String::from_utf8_lossy(before),
            ([], after) => String::from_utf8_lossy(after),
            (before, after) => {
                let mut it = String::with_capacity(before.len() + after.len());
                it.push_str(&String::from_utf8_lossy(before));
                it.push_str(&String::from_utf8_lossy(after));
                Cow::Owned(it)
            }
        }
    }

    /// The whole text as bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> { [self.before_gap(), self.after_gap()].concat() }
}

/// Zeroed block of `capacity` bytes. A size the allocator can't supply is an error
/// rather than an abort.
pub(crate) fn try_allocate_block(capacity: usize) -> GapBufferResult<Box<[u8]>> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(capacity)
        .map_err(|_| GapBufferError::AllocationFailure {
            provided: capacity,
            minimum: MIN_CAPACITY,
        })?;
    block.resize(capacity, 0);
    Ok(block.into_boxed_slice())
}

impl Drop for GapBuffer {
    fn drop(&mut self) {
        if let Some(deallocator) = self.deallocator.take() {
            deallocator(std::mem::take(&mut self.data));
        }
    }
}

/// The copy gets its own block of the same capacity and no deallocator.
impl Clone for GapBuffer {
    fn clone(&self) -> Self {
        let mut data = vec![0; self.data.len()].into_boxed_slice();
        let after_start = self.gap_end();
        data[..self.gap_offset].copy_from_slice(self.before_gap());
        data[after_start..].copy_from_slice(self.after_gap());
        Self {
            data,
            gap_offset: self.gap_offset,
            gap_length: self.gap_length,
            column_current: self.column_current,
            column_target: self.column_target,
            deallocator: None,
        }
    }
}

impl Debug for GapBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("capacity", &self.capacity())
            .field("gap_offset", &self.gap_offset)
            .field("gap_length", &self.gap_length)
            .field("column_current", &self.column_current)
            .field("column_target", &self.column_target)
            .field("before_gap", &String::from_utf8_lossy(self.before_gap()))
            .field("after_gap", &String::from_utf8_lossy(self.after_gap()))
            .field("has_deallocator", &self.deallocator.is_some())
            .finish()
    }
}

impl Display for GapBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            String::from_utf8_lossy(self.before_gap()),
            String::from_utf8_lossy(self.after_gap())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_new_is_all_gap() {
        let buffer = GapBuffer::new(16).unwrap();
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.gap_length(), 16);
        assert_eq!(buffer.byte_count(), 0);
        assert_eq!(buffer.cursor_byte_offset(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_new_rejects_tiny_capacity() {
        let result = GapBuffer::new(MIN_CAPACITY - 1);
        assert!(matches!(
            result,
            Err(GapBufferError::AllocationFailure {
                provided: 3,
                minimum: MIN_CAPACITY
            })
        ));
    }

    #[test]
    fn test_new_reports_unallocatable_capacity() {
        let result = GapBuffer::new(usize::MAX);
        assert!(matches!(
            result,
            Err(GapBufferError::AllocationFailure {
                provided: usize::MAX,
                minimum: MIN_CAPACITY
            })
        ));
    }

    #[test]
    fn test_clone_with_unallocatable_capacity_keeps_original() {
        let mut buffer = GapBuffer::new(8).unwrap();
        buffer.insert_str("abc").unwrap();
        assert!(matches!(
            buffer.try_clone_with_capacity(usize::MAX),
            Err(GapBufferError::AllocationFailure { .. })
        ));
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_from_memory_returns_block_on_drop() {
        let returned = Rc::new(Cell::new(0));
        let returned_clone = returned.clone();
        {
            let mut buffer =
                GapBuffer::from_memory(vec![0xAA; 8].into_boxed_slice(), move |block| {
                    returned_clone.set(block.len());
                })
                .unwrap();
            buffer.insert_str("hi").unwrap();
            assert_eq!(buffer.to_string(), "hi");
            assert_eq!(returned.get(), 0);
        }
        assert_eq!(returned.get(), 8);
    }

    #[test]
    fn test_from_memory_too_small_hands_block_back() {
        let returned = Rc::new(Cell::new(false));
        let returned_clone = returned.clone();
        let result = GapBuffer::from_memory(vec![0; 2].into_boxed_slice(), move |_| {
            returned_clone.set(true);
        });
        assert!(result.is_err());
        assert!(returned.get());
    }

    #[test]
    fn test_wipe_keeps_block() {
        let mut buffer = GapBuffer::new(16).unwrap();
        buffer.insert_str("abc\nde").unwrap();
        buffer.wipe();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.current_column(), 0);
        assert_eq!(buffer.lines().count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = GapBuffer::new(16).unwrap();
        original.insert_str("hello").unwrap();
        original.move_relative(-2);

        let mut copy = original.clone();
        assert_eq!(copy.capacity(), 16);
        assert_eq!(copy.cursor_byte_offset(), 3);
        assert_eq!(copy.current_column(), 3);

        copy.insert_str("XY").unwrap();
        assert_eq!(copy.to_string(), "helXYlo");
        assert_eq!(original.to_string(), "hello");
    }

    #[test]
    fn test_try_clone_with_capacity() {
        let mut original = GapBuffer::new(8).unwrap();
        original.insert_str("héllo").unwrap();
        original.move_relative(-4);

        let bigger = original.try_clone_with_capacity(64).unwrap();
        assert_eq!(bigger.capacity(), 64);
        assert_eq!(bigger.to_string(), "héllo");
        assert_eq!(bigger.before_gap(), b"h");
        assert_eq!(bigger.current_column(), 1);

        let result = original.try_clone_with_capacity(5);
        assert!(matches!(
            result,
            Err(GapBufferError::CapacityExceeded {
                requested: 6,
                available: 5
            })
        ));
    }

    #[test]
    fn test_byte_at_skips_gap() {
        let mut buffer = GapBuffer::new(16).unwrap();
        buffer.insert_str("abcd").unwrap();
        buffer.move_absolute(2);
        assert_eq!(buffer.byte_at(1), Some(b'b'));
        assert_eq!(buffer.byte_at(2), Some(b'c'));
        assert_eq!(buffer.byte_at(3), Some(b'd'));
        assert_eq!(buffer.byte_at(4), None);
    }

    #[test]
    fn test_to_cow_borrows_when_contiguous() {
        let mut buffer = GapBuffer::new(16).unwrap();
        buffer.insert_str("abcd").unwrap();
        assert!(matches!(buffer.to_cow(), Cow::Borrowed("abcd")));

        buffer.move_absolute(2);
        assert!(matches!(buffer.to_cow(), Cow::Owned(_)));
        assert_eq!(buffer.to_cow(), "abcd");
        assert_eq!(buffer.to_bytes(), b"abcd".to_vec());
    }
}
