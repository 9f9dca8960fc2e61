// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use gapbuf::{TracingConfig, setup_default_miette_global_report_handler};
use gapbuf_cmdr::{CLIArg, GBX_ISSUES_URL, GBX_LOG_FILE_NAME, run_app};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(GBX_ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        TracingConfig::new_file(Some(GBX_LOG_FILE_NAME.to_string()))
            .with_level_filter(tracing_core::LevelFilter::DEBUG)
            .install_global()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_app(&cli_arg);

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run gbx due to the following problem",
            error = ?error
        );
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
