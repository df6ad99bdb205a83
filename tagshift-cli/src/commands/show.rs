//! Show command handler

use std::path::PathBuf;

use anyhow::Result;
use tagshift_core::source::write_stream;
use tagshift_core::{OutputFormat, Source, ops};

use crate::config::Config;

/// Print the definitions read from a file or stdin
pub fn handle_show(
    file: Option<PathBuf>,
    format: OutputFormat,
    show_all: bool,
    config: &Config,
) -> Result<()> {
    let source = Source::from_arg(file);
    let rendered = ops::display(
        &source,
        std::io::stdin().lock(),
        config.mode,
        format,
        show_all,
    )?;

    write_stream(&mut std::io::stdout().lock(), &rendered)?;
    Ok(())
}
