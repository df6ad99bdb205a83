//! Error types for tagshift

use std::path::PathBuf;

use thiserror::Error;

use crate::output::OutputFormat;

/// Result type alias for tagshift operations
pub type Result<T> = std::result::Result<T, TagShiftError>;

/// Errors that can occur while loading, rewriting or rendering definitions
#[derive(Debug, Error)]
pub enum TagShiftError {
    /// Reading the source or writing the destination failed
    #[error("{}", io_message(.path, .source))]
    Io {
        /// File involved, `None` for stdin/stdout
        path: Option<PathBuf>,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Cleaned input is not valid JSON for the requested shape
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Container mode received a single object instead of an array
    #[error("input must be an array of container definitions")]
    NotAnArray,

    /// The new tag was missing or empty
    #[error("tag is required")]
    EmptyTag,

    /// Unrecognized mode name
    #[error("invalid mode: {0} (must be 'task' or 'container')")]
    InvalidMode(String),

    /// Unrecognized or disallowed output format name
    #[error("invalid output format: {value} (must be {allowed})")]
    InvalidFormat {
        /// The value that was supplied
        value: String,
        /// Human readable list of accepted names
        allowed: &'static str,
    },

    /// A container name filter matched nothing
    #[error("container '{0}' not found in definitions")]
    ContainerNotFound(String),

    /// An image name filter matched nothing
    #[error("image '{0}' not found in definitions")]
    ImageNotFound(String),

    /// The serializer cannot produce this format on the requested path
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(OutputFormat),

    /// JSON or YAML encoding failed
    #[error("failed to encode output: {0}")]
    Encode(String),
}

/// Broad error category, for callers that pick exit codes or messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Validation,
    FilterMismatch,
    UnsupportedFormat,
}

impl TagShiftError {
    /// Create an I/O error tied to a file path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error on a standard stream
    pub fn stream(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse(_) | Self::NotAnArray => ErrorKind::Parse,
            Self::EmptyTag | Self::InvalidMode(_) | Self::InvalidFormat { .. } => {
                ErrorKind::Validation
            }
            Self::ContainerNotFound(_) | Self::ImageNotFound(_) => ErrorKind::FilterMismatch,
            Self::UnsupportedFormat(_) | Self::Encode(_) => ErrorKind::UnsupportedFormat,
        }
    }
}

fn io_message(path: &Option<PathBuf>, source: &std::io::Error) -> String {
    match path {
        Some(path) => format!("failed to access {}: {}", path.display(), source),
        None => format!("failed to access standard stream: {}", source),
    }
}
