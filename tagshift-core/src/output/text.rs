//! Plain text summary

use crate::domain::Definitions;

/// Render the human readable layout
///
/// `Family:` and `Revision:` lines only appear for task definitions.
pub(super) fn render(definitions: &Definitions) -> String {
    let mut out = String::new();

    if let Definitions::Task(task) = definitions {
        out.push_str(&format!("Family: {}\n", task.family().unwrap_or_default()));
        if let Some(revision) = task.revision().filter(|r| *r > 0) {
            out.push_str(&format!("Revision: {}\n", revision));
        }
        out.push('\n');
    }

    out.push_str("Containers:\n");
    for container in definitions.containers() {
        out.push_str(&format!("  - {}: {}\n", container.name, container.image));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContainerDefinition, TaskDefinition};

    #[test]
    fn test_task_text() {
        let task = TaskDefinition {
            family: Some(Some("my-app".to_string())),
            revision: Some(Some(5)),
            container_definitions: vec![
                ContainerDefinition::new("web", "nginx:latest"),
                ContainerDefinition::new("api", "api:v1.0"),
            ],
            ..Default::default()
        };

        assert_eq!(
            render(&task.into()),
            "Family: my-app\nRevision: 5\n\nContainers:\n  - web: nginx:latest\n  - api: api:v1.0\n"
        );
    }

    #[test]
    fn test_task_text_without_revision() {
        let task = TaskDefinition {
            family: Some(Some("my-app".to_string())),
            revision: Some(Some(0)),
            ..Default::default()
        };
        assert_eq!(render(&task.into()), "Family: my-app\n\nContainers:\n");
    }

    #[test]
    fn test_container_list_text() {
        let defs = Definitions::Containers(vec![ContainerDefinition::new("web", "nginx")]);
        assert_eq!(render(&defs), "Containers:\n  - web: nginx\n");
    }
}
