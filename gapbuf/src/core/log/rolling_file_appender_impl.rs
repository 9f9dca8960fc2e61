// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;

/// Appender for a single log file that is never rotated. A bare file name is created
/// in the current folder.
///
/// The appender writes synchronously, so a thread local subscriber's events are on
/// disk as soon as its guard is dropped.
///
/// # Errors
///
/// Returns an error if `file_path` does not name a file, eg: `/` or `..`.
pub fn try_create(file_path: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(file_path);

    let Some(file_name) = path.file_name() else {
        return Err(miette::miette!("Log file path {file_path:?} does not name a file"));
    };

    let folder = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    Ok(tracing_appender::rolling::never(folder, file_name))
}
