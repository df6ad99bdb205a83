//! Container definition domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Nullable, nullable};

/// A single container entry of a task definition
///
/// Only the fields tagshift reads are typed. Everything else is captured in
/// `extra` and written back as sibling keys, so unknown fields survive a
/// load/rewrite/render cycle. Optional fields tell an absent key (`None`)
/// from an explicit `null` (`Some(None)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    #[serde(default)]
    pub name: String,

    /// Image reference in the form `[registry/]repository[:tag]`
    #[serde(default)]
    pub image: String,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub cpu: Nullable<i64>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub memory: Nullable<i64>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub essential: Nullable<bool>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub port_mappings: Nullable<Vec<PortMapping>>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub environment: Nullable<Vec<EnvironmentVariable>>,

    /// Fields not modelled above, in input order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContainerDefinition {
    /// Create a bare container entry with just a name and image
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            cpu: None,
            memory: None,
            essential: None,
            port_mappings: None,
            environment: None,
            extra: Map::new(),
        }
    }
}

/// Port mapping of a container
///
/// Ports are kept as plain integers; range checks are left to ECS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub container_port: Nullable<i64>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub host_port: Nullable<i64>,

    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub protocol: Nullable<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Environment variable passed to a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
