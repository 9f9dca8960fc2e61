// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a graphical [miette](https://docs.rs/miette/latest/miette/index.html) report
//! handler for processes that return `miette::Result` from `main()`.
//!
//! The [`miette::ErrorHook`] is only invoked when a report is actually displayed, so the
//! terminal width is read lazily, at the time the error is printed.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Width used when the `COLUMNS` environment variable is missing or unparsable.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Register the default global report handler. The `issues_url` is printed as the
/// footer of every report. Calling this more than once is harmless, the first hook wins.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = report_width_from_env(std::env::var("COLUMNS").ok().as_deref());
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

fn report_width_from_env(columns: Option<&str>) -> usize {
    columns
        .and_then(|it| it.trim().parse::<usize>().ok())
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_REPORT_WIDTH)
}
