//! Listing merge CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use listing_cli::logging::{LogConfig, LogFormat, init_logging};
use listing_cli::pipeline::run;
use listing_cli::summary::print_summary;
use listing_model::{MergeConfig, RepairStrategy};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match merge_config_from_cli(&cli).and_then(|config| run(&config, cli.dry_run))
    {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Resolve the run configuration: config file, then data directory, then
/// the fixed defaults. `--output` and `--strict` apply on top.
fn merge_config_from_cli(cli: &Cli) -> Result<MergeConfig> {
    let mut config = match (&cli.config, &cli.data_dir) {
        (Some(path), _) => MergeConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        (None, Some(dir)) => MergeConfig::with_data_dir(dir),
        (None, None) => MergeConfig::default(),
    };
    if let Some(output) = &cli.output {
        config = config.with_output(output.clone());
    }
    if cli.strict {
        config = config.with_repair(RepairStrategy::Strict);
    }
    Ok(config)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
