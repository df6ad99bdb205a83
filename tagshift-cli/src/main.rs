//! Tagshift CLI
//!
//! Command-line interface for updating container image tags in ECS task
//! definitions and container definition lists.

mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::Config;
use tagshift_core::{ErrorKind, Mode, TagShiftError};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tagshift", version)]
#[command(about = "Update ECS task definition and container definition image tags")]
#[command(
    long_about = "tagshift updates container image tags in ECS task definitions and \
                  container definitions. It accepts JSON with comments and can output \
                  JSON, YAML, or text."
)]
struct Cli {
    /// Input mode (task or container)
    #[arg(short, long, global = true, env = "TAGSHIFT_MODE", default_value = "task")]
    mode: Mode,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config {
        mode: cli.mode,
        verbosity: cli.verbose,
    };

    // Logs go to stderr, stdout carries the rendered definitions
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Input mode: {}", config.mode);

    match handle_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit status for a failed command
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<TagShiftError>().map(TagShiftError::kind) {
        Some(ErrorKind::Validation | ErrorKind::UnsupportedFormat) => 2,
        Some(ErrorKind::FilterMismatch) => 3,
        Some(ErrorKind::Parse) => 4,
        Some(ErrorKind::Io) => 5,
        None => 1,
    }
}
