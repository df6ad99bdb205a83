//! Definition loader
//!
//! Reads JSONC input, strips comments and decodes it into [`Definitions`]
//! according to the requested [`Mode`].

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{ContainerDefinition, Definitions, TaskDefinition};
use crate::error::{Result, TagShiftError};
use crate::jsonc::strip_comments;
use crate::source::Source;

/// Shape of the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A single task definition object
    #[default]
    Task,
    /// A bare array of container definitions
    Container,
}

impl FromStr for Mode {
    type Err = TagShiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "task" => Ok(Mode::Task),
            "container" => Ok(Mode::Container),
            other => Err(TagShiftError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Task => write!(f, "task"),
            Mode::Container => write!(f, "container"),
        }
    }
}

/// Decode a task definition from JSONC bytes
pub fn parse_task_definition(data: &[u8]) -> Result<TaskDefinition> {
    let clean = strip_comments(data);
    debug!("Stripped comments: {} -> {} bytes", data.len(), clean.len());

    serde_json::from_slice(&clean).map_err(TagShiftError::Parse)
}

/// Decode a list of container definitions from JSONC bytes
///
/// A single object is rejected with [`TagShiftError::NotAnArray`] rather than
/// a generic decode error.
pub fn parse_container_definitions(data: &[u8]) -> Result<Vec<ContainerDefinition>> {
    let clean = strip_comments(data);
    debug!("Stripped comments: {} -> {} bytes", data.len(), clean.len());

    match serde_json::from_slice::<Vec<ContainerDefinition>>(&clean) {
        Ok(containers) => Ok(containers),
        Err(err) => {
            if serde_json::from_slice::<Map<String, Value>>(&clean).is_ok() {
                return Err(TagShiftError::NotAnArray);
            }
            Err(TagShiftError::Parse(err))
        }
    }
}

/// Decode JSONC bytes in the given mode
pub fn parse(data: &[u8], mode: Mode) -> Result<Definitions> {
    let definitions = match mode {
        Mode::Task => Definitions::Task(parse_task_definition(data)?),
        Mode::Container => Definitions::Containers(parse_container_definitions(data)?),
    };

    debug!(
        "Loaded {} container definition(s) in {} mode",
        definitions.containers().len(),
        mode
    );

    Ok(definitions)
}

/// Read a source and decode it in the given mode
///
/// `stdin` backs [`Source::Stdin`] and is ignored for files.
pub fn load_source<R: Read>(source: &Source, stdin: R, mode: Mode) -> Result<Definitions> {
    let data = source.read_from(stdin)?;
    parse(&data, mode)
}
