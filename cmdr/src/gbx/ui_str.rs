// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CopyReport, FileStats, NumberedLine};

/// Marks a line that straddles the gap in `gbx lines --split-markers`.
pub const SPLIT_MARKER: &str = "┊";

#[must_use]
pub fn stats_header() -> String {
    format!("{:>10} {:>12} {:>8}  file", "bytes", "code points", "lines")
}

#[must_use]
pub fn stats_row(stats: &FileStats) -> String {
    format!(
        "{:>10} {:>12} {:>8}  {}",
        stats.bytes, stats.code_points, stats.lines, stats.file_path
    )
}

#[must_use]
pub fn numbered_line(line: &NumberedLine, show_split_marker: bool) -> String {
    let marker = if show_split_marker && line.split {
        SPLIT_MARKER
    } else {
        " "
    };
    format!("{:>6}{marker} {}", line.number, line.text)
}

#[must_use]
pub fn copy_summary(src: &str, dst: &str, report: &CopyReport) -> String {
    format!(
        "Copied {src} -> {dst}: {} bytes written, cursor at byte {}, capacity {}",
        report.bytes_written, report.cursor_byte_offset, report.capacity
    )
}
