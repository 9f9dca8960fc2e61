// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gapbuf::{DEFAULT_FILE_CHUNK_SIZE, GapBufferConfig, GrowthPolicy};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gbx")]
#[command(about = "🧱 Load, inspect, and round-trip text files through a gap buffer")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  gbx [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `gbx.log` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "bytes",
        default_value_t = DEFAULT_FILE_CHUNK_SIZE,
        value_parser = clap::value_parser!(usize),
        help = "Number of bytes read per call when loading a file"
    )]
    pub chunk_size: usize,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = GrowthPolicyArg::Exact,
        help = "How a buffer grows when an insert doesn't fit in the gap"
    )]
    pub growth_policy: GrowthPolicyArg,
}

impl GlobalOption {
    #[must_use]
    pub fn to_gap_buffer_config(&self) -> GapBufferConfig {
        GapBufferConfig::default()
            .with_file_chunk_size(self.chunk_size)
            .with_growth_policy(self.growth_policy.into())
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "📊 Print bytes, code points, and lines for each file\n💡 Eg: `gbx stats notes.md todo.md`"
    )]
    Stats {
        #[arg(name = "file paths", required = true)]
        file_paths: Vec<String>,
    },

    #[clap(
        about = "📜 Print the lines of a file with line numbers\n💡 Eg: `gbx lines notes.md --cursor 40 --split-markers`"
    )]
    Lines {
        #[arg(name = "file path")]
        file_path: String,

        #[arg(
            long,
            value_name = "code point index",
            help = "Put the cursor (and so the gap) here before reading the lines"
        )]
        cursor: Option<usize>,

        #[arg(long, help = "Mark lines that straddle the gap with `┊`")]
        split_markers: bool,
    },

    #[clap(
        about = "📋 Load a file, optionally edit it at the cursor, and save it elsewhere\n💡 Eg: `gbx copy a.md b.md --cursor 3 --insert hello`"
    )]
    Copy {
        #[arg(name = "source path")]
        src: String,

        #[arg(name = "destination path")]
        dst: String,

        #[arg(long, value_name = "code point index", help = "Move the cursor here")]
        cursor: Option<usize>,

        #[arg(long, value_name = "text", help = "Insert this text at the cursor")]
        insert: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GrowthPolicyArg {
    #[clap(help = "Grow to exactly the size needed")]
    Exact,
    #[clap(help = "Double the capacity until the content fits")]
    Doubling,
}

impl From<GrowthPolicyArg> for GrowthPolicy {
    fn from(it: GrowthPolicyArg) -> Self {
        match it {
            GrowthPolicyArg::Exact => GrowthPolicy::Exact,
            GrowthPolicyArg::Doubling => GrowthPolicy::Doubling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_clap_config_is_valid() {
        use clap::CommandFactory;
        CLIArg::command().debug_assert();
    }

    #[test]
    fn test_parse_copy_with_global_options() {
        let cli_arg = CLIArg::try_parse_from([
            "gbx",
            "copy",
            "a.txt",
            "b.txt",
            "--cursor",
            "3",
            "--insert",
            "hi",
            "-l",
            "--chunk-size",
            "16",
            "--growth-policy",
            "doubling",
        ])
        .unwrap();

        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(
            cli_arg.global_options.to_gap_buffer_config(),
            GapBufferConfig::default()
                .with_file_chunk_size(16)
                .with_growth_policy(GrowthPolicy::Doubling)
        );
        match cli_arg.command {
            CLICommand::Copy {
                src,
                dst,
                cursor,
                insert,
            } => {
                assert_eq!(src, "a.txt");
                assert_eq!(dst, "b.txt");
                assert_eq!(cursor, Some(3));
                assert_eq!(insert.as_deref(), Some("hi"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test_case(&["gbx", "stats"] ; "stats needs a file")]
    #[test_case(&["gbx", "lines"] ; "lines needs a file")]
    #[test_case(&["gbx", "copy", "a.txt"] ; "copy needs a destination")]
    #[test_case(&["gbx", "stats", "a.txt", "--growth-policy", "tripling"] ; "unknown growth policy")]
    fn test_parse_errors(args: &[&str]) {
        assert!(CLIArg::try_parse_from(args).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["gbx", "stats", "a.txt"]).unwrap();
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(
            cli_arg.global_options.to_gap_buffer_config(),
            GapBufferConfig::default()
        );
    }
}
