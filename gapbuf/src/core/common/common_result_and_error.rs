/*
 *   Copyright (c) 2022-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Error types for the [`crate::GapBuffer`] engine.
//!
//! Every failure is reported to the immediate caller as a [`GapBufferError`]. Nothing
//! is retried internally, and no malformed input (pasted text, untrusted file content)
//! can crash the process. For more information on the miette + thiserror approach, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::path::PathBuf;

use crate::Utf8ErrorKind;

/// Type alias to make it easy to work with [`GapBufferError`].
pub type GapBufferResult<T> = Result<T, GapBufferError>;

/// Errors from [`crate::GapBuffer`] operations.
///
/// | Variant               | Cause                                                     | State after |
/// | :-------------------- | :-------------------------------------------------------- | :---------- |
/// | [`AllocationFailure`] | Memory block too small, or too big to allocate            | No buffer   |
/// | [`InvalidUtf8`]       | Malformed, truncated, or overlong input to an insert/load | Unchanged   |
/// | [`CapacityExceeded`]  | Gap too small for the insert on a fixed capacity buffer   | Unchanged   |
/// | [`IoFailure`]         | File open, read, or write error                           | Unchanged   |
///
/// [`AllocationFailure`]: Self::AllocationFailure
/// [`InvalidUtf8`]: Self::InvalidUtf8
/// [`CapacityExceeded`]: Self::CapacityExceeded
/// [`IoFailure`]: Self::IoFailure
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GapBufferError {
    /// No usable memory block: the one handed to the constructor is too small, or the
    /// allocator can't supply one of the requested size.
    #[error("No usable memory block of {provided} bytes (the minimum is {minimum})")]
    #[diagnostic(
        code(gapbuf::allocation_failure),
        help("Ask for at least `MIN_CAPACITY` bytes, and no more than the system can allocate")
    )]
    AllocationFailure { provided: usize, minimum: usize },

    /// Input is not well-formed UTF-8.
    #[error("Invalid UTF-8 at byte {byte_offset} of the input ({kind})")]
    #[diagnostic(
        code(gapbuf::invalid_utf8),
        help("Only well-formed UTF-8 can be stored; the buffer was left unchanged")
    )]
    InvalidUtf8 {
        byte_offset: usize,
        kind: Utf8ErrorKind,
    },

    /// The gap is too small for the insert.
    #[error("Insert of {requested} bytes exceeds the {available} bytes left in the gap")]
    #[diagnostic(
        code(gapbuf::capacity_exceeded),
        help("Use `GapBuffer::insert_maybe_relocate()` to grow the buffer on demand")
    )]
    CapacityExceeded { requested: usize, available: usize },

    /// File I/O failed.
    #[error("I/O failure on '{}'", .path.display())]
    #[diagnostic(code(gapbuf::io_failure))]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GapBufferError {
    pub fn io_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }
}

impl From<crate::Utf8Error> for GapBufferError {
    fn from(it: crate::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            byte_offset: it.byte_offset,
            kind: it.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utf8Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        let err = GapBufferError::CapacityExceeded {
            requested: 10,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insert of 10 bytes exceeds the 3 bytes left in the gap"
        );

        let err = GapBufferError::AllocationFailure {
            provided: 0,
            minimum: 8,
        };
        assert!(err.to_string().contains("(the minimum is 8)"));
    }

    #[test]
    fn test_from_utf8_error() {
        let err: GapBufferError = Utf8Error {
            byte_offset: 4,
            kind: Utf8ErrorKind::Overlong,
        }
        .into();
        assert!(matches!(
            err,
            GapBufferError::InvalidUtf8 {
                byte_offset: 4,
                kind: Utf8ErrorKind::Overlong
            }
        ));
    }

    #[test]
    fn test_io_failure_keeps_source() {
        let err = GapBufferError::io_failure(
            "/no/such/file",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/no/such/file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
