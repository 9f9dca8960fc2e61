// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod commands;
pub mod launcher;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use commands::*;
pub use launcher::*;
pub use ui_str::*;

/// Log file written when `--enable-logging` is passed.
pub const GBX_LOG_FILE_NAME: &str = "gbx.log";

/// Printed at the bottom of every error report.
pub const GBX_ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues";
