//! CLI argument definitions for the warehouse pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dwh",
    version,
    about = "Star-schema warehouse builder",
    long_about = "Rebuild a conformed star-schema warehouse from raw multi-source CSV extracts.\n\n\
                  Normalizes column names across source systems, builds surrogate-keyed\n\
                  dimensions and the sales fact, infers DDL, and validates the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline: raw -> staging -> warehouse -> validation.
    Run(RunArgs),

    /// List the conformed warehouse tables and their primary keys.
    Tables,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Data directory containing `raw/`; `staging/` and `warehouse/` are
    /// created beneath it.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Skip the post-load validation sweep.
    #[arg(long = "no-validate")]
    pub no_validate: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
