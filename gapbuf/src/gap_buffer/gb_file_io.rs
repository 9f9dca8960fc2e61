// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole file load and save.
//!
//! Files are read in chunks of [`GapBufferConfig::file_chunk_size`] bytes, or less when
//! the file or the gap is smaller than that. A code point
//! that is cut in two by a chunk boundary is not an error: its first bytes are carried
//! over and completed by the next read. Only a sequence that is still incomplete at the
//! end of the file is reported as [`Utf8ErrorKind::Truncated`].
//!
//! Loading is all or nothing. If any chunk is rejected (bad UTF-8, not enough gap, read
//! error) the buffer is rolled back to what it was before the call.

use std::{fs::File,
          io::{BufWriter, ErrorKind, Read, Write},
          path::Path};

use super::{DEBUG_GAP_BUFFER, GapBuffer, GapBufferConfig, MIN_CAPACITY,
            gb_core::try_allocate_block};
use crate::{GapBufferError, GapBufferResult, Utf8ErrorKind,
            utf8::{MAX_SEQUENCE_LEN, complete_prefix_len, count_code_points}};

/// Cursor state to go back to if a load fails. The bytes in the gap don't matter.
#[derive(Debug, Clone, Copy)]
struct SavedCursor {
    gap_offset: usize,
    gap_length: usize,
    column_current: usize,
    column_target: usize,
}

impl GapBuffer {
    /// Insert the content of the file at `path` at the cursor, with the default
    /// [`GapBufferConfig`].
    ///
    /// # Errors
    ///
    /// See [`Self::insert_file_with_config()`].
    pub fn insert_file(&mut self, path: impl AsRef<Path>) -> GapBufferResult<()> {
        self.insert_file_with_config(path, &GapBufferConfig::default())
    }

    /// Insert the content of the file at `path` at the cursor, as if by one
    /// [`Self::insert_before()`] call.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::IoFailure`] if the file can't be opened or read.
    /// - [`GapBufferError::InvalidUtf8`] if the content is not well-formed UTF-8. The
    ///   offset is relative to the start of the file.
    /// - [`GapBufferError::CapacityExceeded`] if the content doesn't fit in the gap.
    ///
    /// The buffer is unchanged after any of these.
    pub fn insert_file_with_config(
        &mut self,
        path: impl AsRef<Path>,
        config: &GapBufferConfig,
    ) -> GapBufferResult<()> {
        let path = path.as_ref();
        let saved = self.save_cursor();

        match self.read_file_into_gap(path, config.file_chunk_size) {
            Ok(bytes_read) => {
                DEBUG_GAP_BUFFER.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "GapBuffer -> insert_file",
                        path = %path.display(),
                        bytes_read = %bytes_read,
                    );
                });
                Ok(())
            }
            Err(error) => {
                self.restore_cursor(saved);
                DEBUG_GAP_BUFFER.then(|| {
                    // % is Display, ? is Debug.
                    tracing::warn!(
                        message = "GapBuffer -> insert_file rejected, rolled back",
                        path = %path.display(),
                        error = %error,
                    );
                });
                Err(error)
            }
        }
    }

    /// Create a buffer that holds the file at `path` plus
    /// [`GapBufferConfig::load_headroom`] bytes of gap. The cursor is at the start.
    ///
    /// The size comes from the file's metadata. A file that reports a length of 0 is
    /// read whole and the buffer grows to fit it, so procfs style files load too.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert_file_with_config()`].
    pub fn load_from_file(
        path: impl AsRef<Path>,
        config: &GapBufferConfig,
    ) -> GapBufferResult<Self> {
        let path = path.as_ref();
        let file_len = std::fs::metadata(path)
            .map_err(|it| GapBufferError::io_failure(path, it))?
            .len();
        let file_len = usize::try_from(file_len).map_err(|_| {
            GapBufferError::io_failure(
                path,
                std::io::Error::other("file is too large to address"),
            )
        })?;

        let capacity = file_len.saturating_add(config.load_headroom).max(MIN_CAPACITY);
        let mut it = Self::new(capacity)?;
        if file_len == 0 {
            // procfs and similar files report 0 but still have content.
            it.insert_unsized_file(path, config)?;
        } else {
            it.insert_file_with_config(path, config)?;
        }
        it.move_gap_to(0);
        it.refresh_columns();
        Ok(it)
    }

    /// Read all of a file whose size isn't known up front, and insert it, growing the
    /// block per [`GapBufferConfig::growth_policy`].
    fn insert_unsized_file(
        &mut self,
        path: &Path,
        config: &GapBufferConfig,
    ) -> GapBufferResult<()> {
        let content =
            std::fs::read(path).map_err(|it| GapBufferError::io_failure(path, it))?;
        self.insert_maybe_relocate_with_policy(&content, config.growth_policy)?;

        DEBUG_GAP_BUFFER.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "GapBuffer -> insert_unsized_file",
                path = %path.display(),
                bytes_read = %content.len(),
            );
        });
        Ok(())
    }

    /// Write the text to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::IoFailure`] if the file can't be created or written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> GapBufferResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|it| GapBufferError::io_failure(path, it))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|it| GapBufferError::io_failure(path, it))?;

        DEBUG_GAP_BUFFER.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "GapBuffer -> save_to",
                path = %path.display(),
                bytes_written = %self.byte_count(),
            );
        });
        Ok(())
    }

    /// Write the text before the gap, then the text after it.
    ///
    /// # Errors
    ///
    /// Whatever `writer` returns.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(self.before_gap())?;
        writer.write_all(self.after_gap())
    }

    /// Returns the number of bytes inserted.
    fn read_file_into_gap(
        &mut self,
        path: &Path,
        chunk_size: usize,
    ) -> GapBufferResult<usize> {
        let mut file = File::open(path).map_err(|it| GapBufferError::io_failure(path, it))?;

        // Reading more than the gap can take, or more than the file holds, is wasted.
        let file_len_hint = file
            .metadata()
            .ok()
            .and_then(|it| usize::try_from(it.len()).ok())
            .filter(|&it| it > 0)
            .unwrap_or(usize::MAX);
        let chunk_size = chunk_size.min(self.gap_length).min(file_len_hint).max(1);

        // Room for one chunk plus the bytes of a code point carried over from the last.
        let mut chunk =
            try_allocate_block(chunk_size.saturating_add(MAX_SEQUENCE_LEN - 1))?;
        let mut carried = 0;
        let mut consumed = 0;

        loop {
            let read = match file.read(&mut chunk[carried..carried + chunk_size]) {
                Ok(0) => break,
                Ok(it) => it,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(GapBufferError::io_failure(path, error)),
            };

            let filled = carried + read;
            let complete = complete_prefix_len(&chunk[..filled]).map_err(|it| {
                GapBufferError::InvalidUtf8 {
                    byte_offset: consumed + it.byte_offset,
                    kind: it.kind,
                }
            })?;

            let valid = &chunk[..complete];
            self.insert_validated(valid, count_code_points(valid))?;

            chunk.copy_within(complete..filled, 0);
            carried = filled - complete;
            consumed += complete;
        }

        if carried > 0 {
            return Err(GapBufferError::InvalidUtf8 {
                byte_offset: consumed,
                kind: Utf8ErrorKind::Truncated,
            });
        }

        Ok(consumed)
    }

    fn save_cursor(&self) -> SavedCursor {
        SavedCursor {
            gap_offset: self.gap_offset,
            gap_length: self.gap_length,
            column_current: self.column_current,
            column_target: self.column_target,
        }
    }

    fn restore_cursor(&mut self, saved: SavedCursor) {
        self.gap_offset = saved.gap_offset;
        self.gap_length = saved.gap_length;
        self.column_current = saved.column_current;
        self.column_target = saved.column_target;
    }
}
