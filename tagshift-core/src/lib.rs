//! Tagshift Core
//!
//! Loads ECS task definitions or container definition lists written as JSON
//! with comments, rewrites container image tags and renders the result as
//! JSON, YAML or text.
//!
//! This crate contains:
//! - Domain types: task and container definitions with pass-through fields
//! - Loading: comment stripping and decoding per input mode
//! - Rewriting: filter matching and tag substitution
//! - Output: JSON, YAML and text rendering

pub mod domain;
pub mod error;
pub mod image;
pub mod jsonc;
pub mod loader;
pub mod ops;
pub mod output;
pub mod rewrite;
pub mod source;

pub use domain::{ContainerDefinition, Definitions, TaskDefinition};
pub use error::{ErrorKind, Result, TagShiftError};
pub use loader::Mode;
pub use output::OutputFormat;
pub use rewrite::RewriteOptions;
pub use source::{Destination, Source};
