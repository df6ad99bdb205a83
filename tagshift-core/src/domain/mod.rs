//! Descriptor model
//!
//! In-memory form of the two accepted input shapes: a whole task definition,
//! or a bare list of container definitions.

pub mod container;
pub mod task;

pub use container::{ContainerDefinition, EnvironmentVariable, PortMapping};
pub use task::TaskDefinition;

use serde::Serialize;

use crate::loader::Mode;

/// Optional field that remembers an explicit `null`
///
/// `None` means the key was absent, `Some(None)` that it was `null`.
pub type Nullable<T> = Option<Option<T>>;

pub(crate) mod nullable {
    use serde::{Deserialize, Deserializer};

    /// Decode a present key, `null` included, into `Some(..)`
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Loaded input, one variant per load mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Definitions {
    /// A single task definition object
    Task(TaskDefinition),
    /// A bare array of container definitions
    Containers(Vec<ContainerDefinition>),
}

impl Definitions {
    /// Mode that produces this shape
    pub fn mode(&self) -> Mode {
        match self {
            Definitions::Task(_) => Mode::Task,
            Definitions::Containers(_) => Mode::Container,
        }
    }

    /// Container entries, in input order
    pub fn containers(&self) -> &[ContainerDefinition] {
        match self {
            Definitions::Task(task) => &task.container_definitions,
            Definitions::Containers(containers) => containers,
        }
    }

    /// Mutable access to the container entries
    pub fn containers_mut(&mut self) -> &mut [ContainerDefinition] {
        match self {
            Definitions::Task(task) => &mut task.container_definitions,
            Definitions::Containers(containers) => containers,
        }
    }
}

impl From<TaskDefinition> for Definitions {
    fn from(task: TaskDefinition) -> Self {
        Definitions::Task(task)
    }
}

impl From<Vec<ContainerDefinition>> for Definitions {
    fn from(containers: Vec<ContainerDefinition>) -> Self {
        Definitions::Containers(containers)
    }
}
