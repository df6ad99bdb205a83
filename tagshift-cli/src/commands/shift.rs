//! Shift command handler
//!
//! Rewrites image tags and prints the result, or writes it back to the
//! input file with `--overwrite`.

use std::path::PathBuf;

use anyhow::Result;
use colored::*;
use tagshift_core::{Destination, OutputFormat, RewriteOptions, Source, ops};

use crate::config::Config;

/// Flags of the shift command
#[derive(Debug)]
pub struct ShiftOptions {
    pub tag: String,
    pub container: Option<String>,
    pub image: Option<String>,
    pub output: OutputFormat,
    pub overwrite: bool,
}

/// Rewrite image tags of the definitions read from a file or stdin
pub fn handle_shift(file: Option<PathBuf>, opts: ShiftOptions, config: &Config) -> Result<()> {
    let rewrite = RewriteOptions::new(opts.tag)?
        .with_container_name(opts.container)
        .with_image_name(opts.image);

    let source = Source::from_arg(file);
    let destination = ops::rewrite_into(
        &source,
        std::io::stdin().lock(),
        config.mode,
        &rewrite,
        opts.output,
        opts.overwrite,
        &mut std::io::stdout().lock(),
    )?;

    if let Destination::File(path) = destination {
        eprintln!("{} {}", "✓ Updated".green().bold(), path.display());
    }

    Ok(())
}
