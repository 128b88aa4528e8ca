//! CLI argument definitions for the listing merge.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listing-merge",
    version,
    about = "Merge website, google and facebook listing datasets into one table",
    long_about = "Merge three listing datasets keyed by domain.\n\n\
                  Reads the website, google and facebook CSV files, normalizes\n\
                  comparison columns, left-joins on domain and writes one\n\
                  reconciled CSV. With no arguments the files under /home/data are used."
)]
pub struct Cli {
    /// JSON configuration file with source paths, delimiters and output path.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the default dataset file names.
    #[arg(long = "data-dir", value_name = "DIR", conflicts_with = "config")]
    pub data_dir: Option<PathBuf>,

    /// Output CSV path (overrides the configured one).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop rows wider than the header instead of repairing them.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Run every stage but skip writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
