//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "outages",
    version,
    about = "Normalize DOE-417 electric disturbance summaries",
    long_about = "Normalize DOE-417 electric emergency incident and disturbance summaries.\n\n\
                  Loads the annual summary sheets (CSV exports), splits affected areas into\n\
                  state/county rows, canonicalizes categorical fields, combines event\n\
                  timestamps, and writes one combined CSV with restoration insights."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Run every pipeline stage and write the combined CSV.
    Run(RunArgs),

    /// Parse one Area Affected cell and print its (state, county) pairs.
    ParseArea {
        /// Cell text, e.g. "Kentucky: Oldham County; Virginia: Wise County".
        #[arg(value_name = "CELL")]
        cell: String,
    },

    /// List the raw and normalized column schemas.
    Schema,
}

#[derive(Args)]
pub struct RunArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the summary CSV exports.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// File to load, relative to the data directory (repeatable).
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Zero-based index of the source header row.
    #[arg(long = "header-row", value_name = "N", conflicts_with = "auto_header")]
    pub header_row: Option<usize>,

    /// Locate the header row by its content.
    #[arg(long = "auto-header")]
    pub auto_header: bool,

    /// Path of the combined CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the insights summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Skip the insights stage.
    #[arg(long = "no-insights")]
    pub no_insights: bool,
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
