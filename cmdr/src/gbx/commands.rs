// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The work behind each `gbx` command. Nothing here prints, see [`super::launcher`].

use std::path::Path;

use gapbuf::{GapBuffer, GapBufferConfig, GapBufferResult, SlotArena, SlotId};

/// Per file numbers for `gbx stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub file_path: String,
    pub bytes: usize,
    pub code_points: usize,
    pub lines: usize,
}

/// One line for `gbx lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    /// Starts at 1.
    pub number: usize,
    pub text: String,
    pub split: bool,
}

/// What `gbx copy` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub bytes_written: usize,
    pub cursor_byte_offset: usize,
    pub capacity: usize,
}

/// Buffers for every opened file, one arena slot each.
#[derive(Debug, Default)]
pub struct OpenFiles {
    pub buffers: SlotArena<(String, GapBuffer)>,
}

impl OpenFiles {
    /// # Errors
    ///
    /// Any error from [`GapBuffer::load_from_file()`].
    pub fn try_open(
        &mut self,
        file_path: &str,
        config: &GapBufferConfig,
    ) -> GapBufferResult<SlotId> {
        let buffer = GapBuffer::load_from_file(file_path, config)?;
        Ok(self.buffers.insert((file_path.to_string(), buffer)))
    }

    pub fn close(&mut self, id: SlotId) -> Option<GapBuffer> {
        self.buffers.remove(id).map(|(_, buffer)| buffer)
    }
}

/// Open every file, then report on them in the order given.
///
/// # Errors
///
/// The first file that fails to load stops the command.
pub fn try_collect_stats(
    file_paths: &[String],
    config: &GapBufferConfig,
) -> GapBufferResult<Vec<FileStats>> {
    let mut open_files = OpenFiles::default();
    for file_path in file_paths {
        open_files.try_open(file_path, config)?;
    }

    Ok(open_files
        .buffers
        .iter()
        .map(|(_, (file_path, buffer))| FileStats {
            file_path: file_path.clone(),
            bytes: buffer.byte_count(),
            code_points: buffer.code_point_count(),
            lines: buffer.line_count(),
        })
        .collect())
}

/// Load `file_path`, park the cursor at code point `cursor`, and segment.
///
/// # Errors
///
/// Any error from [`GapBuffer::load_from_file()`].
pub fn try_collect_lines(
    file_path: &str,
    cursor: Option<usize>,
    config: &GapBufferConfig,
) -> GapBufferResult<Vec<NumberedLine>> {
    let mut buffer = GapBuffer::load_from_file(file_path, config)?;
    if let Some(index) = cursor {
        buffer.move_absolute(index);
    }

    Ok(buffer
        .lines()
        .enumerate()
        .map(|(index, line)| NumberedLine {
            number: index + 1,
            text: line.to_cow().into_owned(),
            split: line.is_split(),
        })
        .collect())
}

/// Load `src`, move the cursor, insert `insert` (growing the buffer per the config's
/// growth policy), and save to `dst`.
///
/// # Errors
///
/// Any error from loading `src` or saving `dst`.
pub fn try_copy(
    src: &str,
    dst: &str,
    cursor: Option<usize>,
    insert: Option<&str>,
    config: &GapBufferConfig,
) -> GapBufferResult<CopyReport> {
    let mut buffer = GapBuffer::load_from_file(src, config)?;
    if let Some(index) = cursor {
        buffer.move_absolute(index);
    }
    if let Some(text) = insert {
        buffer.insert_maybe_relocate_with_policy(text.as_bytes(), config.growth_policy)?;
    }
    buffer.save_to(Path::new(dst))?;

    Ok(CopyReport {
        bytes_written: buffer.byte_count(),
        cursor_byte_offset: buffer.cursor_byte_offset(),
        capacity: buffer.capacity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapbuf::{GapBufferError, GrowthPolicy, try_create_temp_dir};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_keep_argument_order() {
        let dir = try_create_temp_dir().unwrap();
        let a = dir.join("a.txt");
        let b = dir.join("b.txt");
        std::fs::write(&a, "héllo\nworld\n").unwrap();
        std::fs::write(&b, "世界").unwrap();

        let paths = vec![
            a.to_string_lossy().to_string(),
            b.to_string_lossy().to_string(),
        ];
        let stats = try_collect_stats(&paths, &GapBufferConfig::default()).unwrap();
        assert_eq!(
            stats,
            vec![
                FileStats {
                    file_path: paths[0].clone(),
                    bytes: 13,
                    code_points: 12,
                    lines: 2,
                },
                FileStats {
                    file_path: paths[1].clone(),
                    bytes: 6,
                    code_points: 2,
                    lines: 1,
                },
            ]
        );
    }

    #[test]
    fn test_stats_fail_on_missing_file() {
        let dir = try_create_temp_dir().unwrap();
        let missing = dir.join("missing.txt").to_string_lossy().to_string();
        let result = try_collect_stats(&[missing], &GapBufferConfig::default());
        assert!(matches!(result, Err(GapBufferError::IoFailure { .. })));
    }

    #[test]
    fn test_lines_mark_split_line() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.try_write_file("lines.txt", "abc\ndef\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let lines = try_collect_lines(&path, Some(5), &GapBufferConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec![
                NumberedLine {
                    number: 1,
                    text: "abc".to_string(),
                    split: false,
                },
                NumberedLine {
                    number: 2,
                    text: "def".to_string(),
                    split: true,
                },
            ]
        );
    }

    #[test]
    fn test_copy_with_insert_relocates() {
        let dir = try_create_temp_dir().unwrap();
        let src = dir.join("src.txt");
        let dst = dir.join("dst.txt");
        std::fs::write(&src, "hello world").unwrap();

        let config = GapBufferConfig::default().with_growth_policy(GrowthPolicy::Doubling);
        let report = try_copy(
            &src.to_string_lossy(),
            &dst.to_string_lossy(),
            Some(5),
            Some(","),
            &config,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "hello, world");
        assert_eq!(
            report,
            CopyReport {
                bytes_written: 12,
                cursor_byte_offset: 6,
                capacity: 22,
            }
        );
    }

    #[test]
    fn test_open_files_reuses_slots() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.try_write_file("one.txt", "one").unwrap();
        let path = path.to_string_lossy().to_string();

        let mut open_files = OpenFiles::default();
        let first = open_files.try_open(&path, &GapBufferConfig::default()).unwrap();
        assert_eq!(open_files.close(first).unwrap().to_string(), "one");
        assert!(open_files.close(first).is_none());

        let second = open_files.try_open(&path, &GapBufferConfig::default()).unwrap();
        assert_eq!(second.index, first.index);
        assert_eq!(open_files.buffers.len(), 1);
    }
}
