// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CLICommand, copy_summary, numbered_line, stats_header, stats_row,
            try_collect_lines, try_collect_stats, try_copy};

/// Run the parsed command and print its output to stdout.
///
/// # Errors
///
/// Whatever the command fails with, as a [`miette::Report`] so the process level
/// report handler can render it.
pub fn run_app(cli_arg: &CLIArg) -> miette::Result<()> {
    let config = cli_arg.global_options.to_gap_buffer_config();

    // % is Display, ? is Debug.
    tracing::debug!(message = "gbx -> run_app", command = ?cli_arg.command, config = ?config);

    match &cli_arg.command {
        CLICommand::Stats { file_paths } => {
            let all_stats = try_collect_stats(file_paths, &config)?;
            println!("{}", stats_header());
            for stats in &all_stats {
                println!("{}", stats_row(stats));
            }
        }
        CLICommand::Lines {
            file_path,
            cursor,
            split_markers,
        } => {
            for line in try_collect_lines(file_path, *cursor, &config)? {
                println!("{}", numbered_line(&line, *split_markers));
            }
        }
        CLICommand::Copy {
            src,
            dst,
            cursor,
            insert,
        } => {
            let report = try_copy(src, dst, *cursor, insert.as_deref(), &config)?;
            println!("{}", copy_summary(src, dst, &report));
        }
    }

    Ok(())
}
