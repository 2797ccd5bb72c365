//! RJI registration CLI.

use clap::{ColorChoice, Parser};
use rji_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_append, run_columns, run_init, run_reconcile, run_set_link, run_show};
use crate::summary::{print_json, print_summary};
use crate::types::ReconcileOutcome;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config_path = cli.config.as_deref();
    let exit_code = match &cli.command {
        Command::Init(args) => match run_init(args, config_path) {
            Ok(created) => {
                if created.is_empty() {
                    println!("All datasets already exist in {}", args.data_dir.display());
                } else {
                    for name in &created {
                        println!("Created {name}");
                    }
                }
                0
            }
            Err(error) => report(&error),
        },
        Command::Reconcile(args) => match run_reconcile(args, config_path) {
            Ok(outcome) => print_outcome(&outcome, args.details, args.json),
            Err(error) => report(&error),
        },
        Command::Show(args) => match run_show(args, config_path) {
            Ok(outcome) => print_outcome(&outcome, args.details, false),
            Err(error) => report(&error),
        },
        Command::Append(args) => match run_append(args, config_path) {
            Ok(Some(outcome)) => print_outcome(&outcome, false, false),
            Ok(None) => {
                println!("Registration stored");
                0
            }
            Err(error) => report(&error),
        },
        Command::SetLink(args) => match run_set_link(args, config_path) {
            Ok(updated) => {
                println!("Updated {updated} row(s)");
                0
            }
            Err(error) => report(&error),
        },
        Command::Columns(args) => {
            run_columns(args);
            0
        }
    };
    std::process::exit(exit_code);
}

fn print_outcome(outcome: &ReconcileOutcome, details: bool, json: bool) -> i32 {
    if json {
        if let Err(error) = print_json(outcome) {
            eprintln!("error: {error}");
            return 1;
        }
    } else {
        print_summary(outcome, details);
    }
    0
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
