// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::MIN_CAPACITY;

/// Read size for [`crate::GapBuffer::insert_file()`].
pub const DEFAULT_FILE_CHUNK_SIZE: usize = 4096;

/// How big the new block is when [`crate::GapBuffer::insert_maybe_relocate()`] has to
/// relocate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Exactly the current content plus the new content. The next insert relocates
    /// again.
    #[default]
    Exact,
    /// Double the capacity until the content fits. Amortized `O(1)` per byte inserted.
    Doubling,
}

impl GrowthPolicy {
    /// Capacity of the new block for a buffer of `current_capacity` that needs to hold
    /// `required` bytes.
    #[must_use]
    pub fn grown_capacity(&self, current_capacity: usize, required: usize) -> usize {
        match self {
            GrowthPolicy::Exact => required.max(MIN_CAPACITY),
            GrowthPolicy::Doubling => {
                let mut it = current_capacity.max(MIN_CAPACITY);
                while it < required {
                    it = it.saturating_mul(2);
                }
                it
            }
        }
    }
}

/// Knobs for growth and file I/O.
///
/// ```rust
/// use gapbuf::{GapBufferConfig, GrowthPolicy};
///
/// let config = GapBufferConfig::default()
///     .with_file_chunk_size(1024)
///     .with_growth_policy(GrowthPolicy::Doubling);
/// assert_eq!(config.load_headroom, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapBufferConfig {
    /// Bytes read per call while loading a file. Never less than 1.
    pub file_chunk_size: usize,
    /// Extra gap bytes to allocate on top of the file size in
    /// [`crate::GapBuffer::load_from_file()`].
    pub load_headroom: usize,
    pub growth_policy: GrowthPolicy,
}

impl Default for GapBufferConfig {
    fn default() -> Self {
        Self {
            file_chunk_size: DEFAULT_FILE_CHUNK_SIZE,
            load_headroom: 0,
            growth_policy: GrowthPolicy::default(),
        }
    }
}

impl GapBufferConfig {
    #[must_use]
    pub fn with_file_chunk_size(mut self, file_chunk_size: usize) -> Self {
        self.file_chunk_size = file_chunk_size.max(1);
        self
    }

    #[must_use]
    pub fn with_load_headroom(mut self, load_headroom: usize) -> Self {
        self.load_headroom = load_headroom;
        self
    }

    #[must_use]
    pub fn with_growth_policy(mut self, growth_policy: GrowthPolicy) -> Self {
        self.growth_policy = growth_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(GrowthPolicy::Exact, 16, 20, 20 ; "exact")]
    #[test_case(GrowthPolicy::Exact, 16, 1, MIN_CAPACITY ; "exact never below minimum")]
    #[test_case(GrowthPolicy::Doubling, 16, 20, 32 ; "doubling once")]
    #[test_case(GrowthPolicy::Doubling, 16, 100, 128 ; "doubling three times")]
    #[test_case(GrowthPolicy::Doubling, 0, 5, 8 ; "doubling from empty")]
    fn test_grown_capacity(
        policy: GrowthPolicy,
        current_capacity: usize,
        required: usize,
        expected: usize,
    ) {
        assert_eq!(policy.grown_capacity(current_capacity, required), expected);
    }

    #[test]
    fn test_builders() {
        let config = GapBufferConfig::default()
            .with_file_chunk_size(0)
            .with_load_headroom(64)
            .with_growth_policy(GrowthPolicy::Doubling);
        assert_eq!(
            config,
            GapBufferConfig {
                file_chunk_size: 1,
                load_headroom: 64,
                growth_policy: GrowthPolicy::Doubling,
            }
        );
        assert_eq!(GapBufferConfig::default().file_chunk_size, DEFAULT_FILE_CHUNK_SIZE);
    }
}
