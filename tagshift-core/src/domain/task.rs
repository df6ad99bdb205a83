//! Task definition domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::container::ContainerDefinition;
use super::{Nullable, nullable};

/// A task definition and the container entries it owns
///
/// Optional metadata is only written back if it was present in the input,
/// including when it was present as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub family: Nullable<String>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub task_role_arn: Nullable<String>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Nullable<String>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub network_mode: Nullable<String>,

    /// Container entries, in input order
    #[serde(default)]
    pub container_definitions: Vec<ContainerDefinition>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub requires_compatibilities: Nullable<Vec<String>>,

    /// Task level CPU units, a string in the ECS schema
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub cpu: Nullable<String>,

    /// Task level memory, a string in the ECS schema
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub memory: Nullable<String>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub revision: Nullable<i64>,

    /// Fields not modelled above, in input order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskDefinition {
    /// Family name, if set to a value
    pub fn family(&self) -> Option<&str> {
        self.family.as_ref().and_then(|f| f.as_deref())
    }

    /// Revision number, if set to a value
    pub fn revision(&self) -> Option<i64> {
        self.revision.flatten()
    }
}
