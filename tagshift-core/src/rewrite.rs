//! Filter and rewrite engine
//!
//! Selects container entries by name and/or image repository and replaces
//! the tag of every selected image, leaving the repository untouched.

use tracing::{debug, info};

use crate::domain::{ContainerDefinition, Definitions, TaskDefinition};
use crate::error::{Result, TagShiftError};
use crate::image::{parse_image, repository_name, with_tag};

/// What to rewrite and which entries to touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Tag written onto every matching image
    pub tag: String,
    /// Only entries with exactly this name
    pub container_name: Option<String>,
    /// Only entries whose repository, or its last path segment, is this
    pub image_name: Option<String>,
}

impl RewriteOptions {
    /// Create options for a tag, rejecting an empty one
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(TagShiftError::EmptyTag);
        }
        Ok(Self {
            tag,
            container_name: None,
            image_name: None,
        })
    }

    /// Restrict to a container name; an empty name means no filter
    pub fn with_container_name(mut self, name: Option<String>) -> Self {
        self.container_name = name.filter(|n| !n.is_empty());
        self
    }

    /// Restrict to an image repository; an empty name means no filter
    pub fn with_image_name(mut self, name: Option<String>) -> Self {
        self.image_name = name.filter(|n| !n.is_empty());
        self
    }

    /// Whether any filter is set
    pub fn has_filter(&self) -> bool {
        self.container_name.is_some() || self.image_name.is_some()
    }

    /// Whether an entry satisfies every filter that is set
    pub fn matches(&self, container: &ContainerDefinition) -> bool {
        if let Some(name) = &self.container_name {
            if container.name != *name {
                return false;
            }
        }

        if let Some(image_name) = &self.image_name {
            let image_name = image_name.as_str();
            let (repository, _) = parse_image(&container.image);
            if repository != image_name && repository_name(repository) != image_name {
                return false;
            }
        }

        true
    }

    /// Mismatch error for the filters, container name first
    fn not_found(&self) -> TagShiftError {
        match (&self.container_name, &self.image_name) {
            (Some(name), _) => TagShiftError::ContainerNotFound(name.clone()),
            (None, image) => TagShiftError::ImageNotFound(image.clone().unwrap_or_default()),
        }
    }
}

/// Rewrite matching container entries in place
///
/// Returns the number of rewritten entries. Fails only when a filter was set
/// and nothing matched, in which case no entry has been touched.
pub fn rewrite_containers(
    containers: &mut [ContainerDefinition],
    opts: &RewriteOptions,
) -> Result<usize> {
    let mut updated = 0;

    for container in containers.iter_mut() {
        if !opts.matches(container) {
            debug!("Skipping container '{}'", container.name);
            continue;
        }

        let image = with_tag(&container.image, &opts.tag);
        debug!(
            "Container '{}': {} -> {}",
            container.name, container.image, image
        );
        container.image = image;
        updated += 1;
    }

    if updated == 0 && opts.has_filter() {
        return Err(opts.not_found());
    }

    info!("Updated {} container(s) to tag '{}'", updated, opts.tag);
    Ok(updated)
}

impl TaskDefinition {
    /// Rewrite matching entries of this task definition in place
    pub fn rewrite(&mut self, opts: &RewriteOptions) -> Result<usize> {
        rewrite_containers(&mut self.container_definitions, opts)
    }
}

impl Definitions {
    /// Rewrite matching entries in place, whatever the shape
    pub fn rewrite(&mut self, opts: &RewriteOptions) -> Result<usize> {
        rewrite_containers(self.containers_mut(), opts)
    }
}
