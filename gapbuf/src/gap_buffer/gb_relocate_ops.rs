// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Growth on demand. A [`GapBuffer`] never resizes its block in place: when the gap is
//! too small the content is copied into a bigger block, the insert is done there, and
//! the new buffer takes the old one's place.

use super::{DEBUG_GAP_BUFFER, GapBuffer, GrowthPolicy};
use crate::{GapBufferResult, utf8::validate};

impl GapBuffer {
    /// [`Self::insert_before()`] that relocates to a bigger block (sized with
    /// [`GrowthPolicy::Exact`]) instead of failing when the gap is too small.
    ///
    /// # Errors
    ///
    /// [`crate::GapBufferError::InvalidUtf8`] if `bytes` is not well-formed UTF-8.
    /// Nothing is allocated in that case.
    pub fn insert_maybe_relocate(&mut self, bytes: &[u8]) -> GapBufferResult<()> {
        self.insert_maybe_relocate_with_policy(bytes, GrowthPolicy::default())
    }

    /// [`Self::insert_maybe_relocate()`] with a chosen [`GrowthPolicy`].
    ///
    /// The cursor and columns survive the move. The old block (and its deallocator) is
    /// released only after the insert into the new block has succeeded.
    ///
    /// # Errors
    ///
    /// - [`crate::GapBufferError::InvalidUtf8`] if `bytes` is not well-formed UTF-8.
    /// - [`crate::GapBufferError::AllocationFailure`] if the grown block can't be
    ///   allocated. The buffer is unchanged.
    pub fn insert_maybe_relocate_with_policy(
        &mut self,
        bytes: &[u8],
        growth_policy: GrowthPolicy,
    ) -> GapBufferResult<()> {
        let code_points = validate(bytes)?;

        if bytes.len() <= self.gap_length {
            return self.insert_validated(bytes, code_points);
        }

        let required = self.byte_count() + bytes.len();
        let new_capacity = growth_policy.grown_capacity(self.capacity(), required);
        let mut relocated = self.try_clone_with_capacity(new_capacity)?;
        relocated.insert_validated(bytes, code_points)?;

        DEBUG_GAP_BUFFER.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "GapBuffer -> relocate",
                old_capacity = %self.capacity(),
                new_capacity = %new_capacity,
                growth_policy = ?growth_policy,
            );
        });

        // Drops the old buffer, which hands its block to its deallocator.
        *self = relocated;
        Ok(())
    }
}
