//! Display and rewrite operations
//!
//! The two end-to-end operations offered to the command line: read a source,
//! optionally rewrite tags, and produce rendered bytes. Nothing is written
//! until rendering has fully succeeded.

use std::io::{Read, Write};

use tracing::{debug, info};

use crate::error::{Result, TagShiftError};
use crate::loader::{Mode, load_source};
use crate::output::{self, OutputFormat};
use crate::rewrite::RewriteOptions;
use crate::source::{Destination, Source, write_file, write_stream};

/// Load a source and render it for display
///
/// `stdin` is read only when `source` is [`Source::Stdin`].
pub fn display<R: Read>(
    source: &Source,
    stdin: R,
    mode: Mode,
    format: OutputFormat,
    show_all: bool,
) -> Result<Vec<u8>> {
    let definitions = load_source(source, stdin, mode)?;
    output::render(&definitions, format, show_all)
}

/// Load a source, rewrite matching image tags and render the full result
///
/// Only JSON and YAML are accepted; the format is checked before the source
/// is read.
pub fn rewrite<R: Read>(
    source: &Source,
    stdin: R,
    mode: Mode,
    opts: &RewriteOptions,
    format: OutputFormat,
) -> Result<Vec<u8>> {
    if !format.supports_full() {
        return Err(TagShiftError::InvalidFormat {
            value: format.to_string(),
            allowed: "json or yaml",
        });
    }

    let mut definitions = load_source(source, stdin, mode)?;
    let updated = definitions.rewrite(opts)?;
    debug!("Rewrote {} container(s) from {}", updated, source);

    output::render_full(&definitions, format)
}

/// Rewrite and deliver the result
///
/// With `overwrite` and a file source the file is replaced; otherwise the
/// output goes to `out`. Overwrite on stdin falls back to `out`.
pub fn rewrite_into<R: Read, W: Write>(
    source: &Source,
    stdin: R,
    mode: Mode,
    opts: &RewriteOptions,
    format: OutputFormat,
    overwrite: bool,
    out: &mut W,
) -> Result<Destination> {
    let rendered = rewrite(source, stdin, mode, opts, format)?;

    match source.path() {
        Some(path) if overwrite => {
            write_file(path, &rendered)?;
            info!("Overwrote {}", path.display());
            Ok(Destination::File(path.to_path_buf()))
        }
        _ => {
            if overwrite {
                debug!("Overwrite requested for {}, writing to output stream", source);
            }
            write_stream(out, &rendered)?;
            Ok(Destination::Stream)
        }
    }
}
