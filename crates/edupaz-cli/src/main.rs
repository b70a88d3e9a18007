//! Institution timeline form CLI.

use clap::{ColorChoice, Parser};
use edupaz_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_add_event, run_check, run_export, run_init, run_remove_event, run_set, run_show,
    run_update_event,
};
use crate::summary::{print_export_summary, print_form, print_readiness};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let form = cli.form.as_path();
    let result = match &cli.command {
        Command::Init(args) => run_init(form, args).map(|()| 0),
        Command::Set(args) => run_set(form, args).map(|()| 0),
        Command::AddEvent => run_add_event(form).map(|len| {
            println!("{len}");
            0
        }),
        Command::RemoveEvent(args) => run_remove_event(form, args).map(|()| 0),
        Command::UpdateEvent(args) => run_update_event(form, args).map(|()| 0),
        Command::Show => run_show(form).map(|state| {
            print_form(&state);
            0
        }),
        Command::Check => run_check(form).map(|missing| {
            print_readiness(&missing);
            if missing.is_empty() { 0 } else { 1 }
        }),
        Command::Export(args) => run_export(form, args).map(|delivered| {
            print_export_summary(&delivered);
            0
        }),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
