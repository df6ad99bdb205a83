//! Input sources and output destinations

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TagShiftError};

/// Where definitions are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A named file
    File(PathBuf),
}

impl Source {
    /// Build a source from an optional file argument, stdin when absent
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Source::File(path),
            None => Source::Stdin,
        }
    }

    /// Path of the source, if it is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }

    /// Read the whole source into memory
    ///
    /// `stdin` is only consumed for [`Source::Stdin`].
    pub fn read_from<R: Read>(&self, mut stdin: R) -> Result<Vec<u8>> {
        let data = match self {
            Source::Stdin => {
                let mut data = Vec::new();
                stdin
                    .read_to_end(&mut data)
                    .map_err(TagShiftError::stream)?;
                data
            }
            Source::File(path) => std::fs::read(path).map_err(|e| TagShiftError::io(path, e))?,
        };

        debug!("Read {} bytes from {}", data.len(), self);
        Ok(data)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where rendered output went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The stream handed to the operation (normally stdout)
    Stream,
    /// The source file was overwritten
    File(PathBuf),
}

/// Write rendered bytes to a stream and flush it
pub fn write_stream<W: Write>(out: &mut W, rendered: &[u8]) -> Result<()> {
    out.write_all(rendered).map_err(TagShiftError::stream)?;
    out.flush().map_err(TagShiftError::stream)
}

/// Replace a file's contents with rendered bytes
pub fn write_file(path: &Path, rendered: &[u8]) -> Result<()> {
    std::fs::write(path, rendered).map_err(|e| TagShiftError::io(path, e))?;
    debug!("Wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}
