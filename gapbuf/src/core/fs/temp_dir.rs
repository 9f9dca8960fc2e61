// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scratch folders for tests that load and save gap buffer files.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;

use super::generate_friendly_random_id;

/// A folder under [`std::env::temp_dir()`] that is removed, with everything in it, on
/// [`Drop`].
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }

    /// Write `content` to `file_name` inside this folder and return its full path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be written.
    pub fn try_write_file(
        &self,
        file_name: &str,
        content: impl AsRef<[u8]>,
    ) -> miette::Result<PathBuf> {
        let file_path = self.join(file_name);
        std::fs::write(&file_path, content).into_diagnostic()?;
        Ok(file_path)
    }
}

/// Create a [`TempDir`] with a random, human readable name.
///
/// ```no_run
/// use gapbuf::try_create_temp_dir;
/// let scratch = try_create_temp_dir().unwrap();
/// let notes = scratch.try_write_file("notes.txt", "hello\n").unwrap();
/// assert!(notes.starts_with(&*scratch));
/// ```
///
/// # Errors
///
/// Returns an error if the folder can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let inner = std::env::temp_dir().join(generate_friendly_random_id());
    std::fs::create_dir(&inner).into_diagnostic()?;
    Ok(TempDir { inner })
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}
