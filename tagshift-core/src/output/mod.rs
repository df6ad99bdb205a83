//! Output rendering
//!
//! Renders [`Definitions`] as JSON, YAML or a short text summary. Two
//! projections exist: the full definition with every field (including the
//! ones tagshift does not model), and a summary mapping container names to
//! images.

mod text;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::Definitions;
use crate::error::{Result, TagShiftError};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// Display only, never a rewrite target
    Text,
}

impl OutputFormat {
    /// Whether full-fidelity output can be produced in this format
    pub fn supports_full(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

impl FromStr for OutputFormat {
    type Err = TagShiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "text" => Ok(OutputFormat::Text),
            other => Err(TagShiftError::InvalidFormat {
                value: other.to_string(),
                allowed: "json, yaml, or text",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Name to image projection of a set of definitions
#[derive(Debug, Serialize)]
struct Summary<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<i64>,

    containers: BTreeMap<&'a str, &'a str>,
}

impl<'a> From<&'a Definitions> for Summary<'a> {
    fn from(definitions: &'a Definitions) -> Self {
        let (family, revision) = match definitions {
            Definitions::Task(task) => (task.family(), task.revision()),
            Definitions::Containers(_) => (None, None),
        };

        let containers = definitions
            .containers()
            .iter()
            .map(|c| (c.name.as_str(), c.image.as_str()))
            .collect();

        Self {
            family,
            revision,
            containers,
        }
    }
}

/// Render for display; `show_all` selects the full projection
pub fn render(definitions: &Definitions, format: OutputFormat, show_all: bool) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => Ok(text::render(definitions).into_bytes()),
        _ if show_all => render_full(definitions, format),
        OutputFormat::Json => to_json(&Summary::from(definitions)),
        OutputFormat::Yaml => to_yaml(&Summary::from(definitions)),
    }
}

/// Render every field, as used for rewrite results
///
/// Text output is rejected with [`TagShiftError::UnsupportedFormat`].
pub fn render_full(definitions: &Definitions, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => to_json(definitions),
        OutputFormat::Yaml => to_yaml(definitions),
        OutputFormat::Text => Err(TagShiftError::UnsupportedFormat(format)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out =
        serde_json::to_vec_pretty(value).map_err(|e| TagShiftError::Encode(e.to_string()))?;
    out.push(b'\n');
    Ok(out)
}

fn to_yaml<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_yaml::to_string(value)
        .map(String::into_bytes)
        .map_err(|e| TagShiftError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContainerDefinition, TaskDefinition};

    fn task() -> Definitions {
        serde_json::from_str::<TaskDefinition>(
            r#"{
                "family": "my-app",
                "revision": 3,
                "containerDefinitions": [
                    {"name": "web", "image": "nginx:latest", "essential": true},
                    {"name": "api", "image": "api:v1.0", "logConfiguration": {"logDriver": "awslogs"}}
                ],
                "volumes": []
            }"#,
        )
        .unwrap()
        .into()
    }

    fn render_str(definitions: &Definitions, format: OutputFormat, show_all: bool) -> String {
        String::from_utf8(render(definitions, format, show_all).unwrap()).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid output format: xml (must be json, yaml, or text)"
        );
    }

    #[test]
    fn test_json_summary() {
        let out = render_str(&task(), OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "family": "my-app",
                "revision": 3,
                "containers": {"web": "nginx:latest", "api": "api:v1.0"}
            })
        );
        assert!(out.starts_with("{\n  \"family\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_summary_containers_sorted_by_name() {
        let out = render_str(&task(), OutputFormat::Json, false);
        let api = out.find("\"api\"").unwrap();
        let web = out.find("\"web\"").unwrap();
        assert!(api < web);
    }

    #[test]
    fn test_json_full_keeps_unknown_fields() {
        let out = render_str(&task(), OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["volumes"], serde_json::json!([]));
        assert_eq!(
            value["containerDefinitions"][1]["logConfiguration"]["logDriver"],
            "awslogs"
        );
        assert_eq!(value["containerDefinitions"][0]["essential"], true);
    }

    #[test]
    fn test_yaml_summary() {
        let out = render_str(&task(), OutputFormat::Yaml, false);
        assert!(out.starts_with("family: my-app\nrevision: 3\ncontainers:\n"));
        assert!(!out.contains('{'));

        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["containers"]["api"].as_str(), Some("api:v1.0"));
        assert_eq!(value["containers"]["web"].as_str(), Some("nginx:latest"));
    }

    #[test]
    fn test_yaml_full() {
        let out = render_str(&task(), OutputFormat::Yaml, true);
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["family"].as_str(), Some("my-app"));
        assert_eq!(
            value["containerDefinitions"][0]["image"].as_str(),
            Some("nginx:latest")
        );
        assert!(value["volumes"].as_sequence().unwrap().is_empty());
    }

    #[test]
    fn test_container_list_summary_has_no_family() {
        let defs = Definitions::Containers(vec![ContainerDefinition::new("web", "nginx:latest")]);
        let value: serde_json::Value =
            serde_json::from_slice(&render(&defs, OutputFormat::Json, false).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"containers": {"web": "nginx:latest"}}));
    }

    #[test]
    fn test_container_list_full_is_array() {
        let defs = Definitions::Containers(vec![ContainerDefinition::new("web", "nginx:latest")]);
        let out = String::from_utf8(render_full(&defs, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            out,
            "[\n  {\n    \"name\": \"web\",\n    \"image\": \"nginx:latest\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_full_rejects_text() {
        let err = render_full(&task(), OutputFormat::Text).unwrap_err();
        assert!(matches!(err, TagShiftError::UnsupportedFormat(OutputFormat::Text)));
        assert!(!OutputFormat::Text.supports_full());
    }
}
