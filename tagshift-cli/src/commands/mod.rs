//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod shift;
mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use tagshift_core::OutputFormat;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Display task definition or container definitions
    Show {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format (json, yaml, text)
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,

        /// Show all fields
        #[arg(long)]
        all: bool,
    },
    /// Update container image tags
    Shift {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// New image tag
        #[arg(short, long)]
        tag: String,

        /// Filter by container name
        #[arg(short, long)]
        container: Option<String>,

        /// Filter by image repository name
        #[arg(short, long)]
        image: Option<String>,

        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,

        /// Overwrite input file (only with file input)
        #[arg(short = 'w', long)]
        overwrite: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Show { file, output, all } => show::handle_show(file, output, all, config),
        Commands::Shift {
            file,
            tag,
            container,
            image,
            output,
            overwrite,
        } => shift::handle_shift(
            file,
            shift::ShiftOptions {
                tag,
                container,
                image,
                output,
                overwrite,
            },
            config,
        ),
    }
}
