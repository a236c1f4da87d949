//! Template data model, registry persistence, and post-clone metadata
//!
//! This module provides:
//! - The `TemplateDefinition` data model persisted by the registry
//! - The `TemplateStore` trait with file-backed and in-memory implementations
//! - `.template-info.json` metadata consumed after a clone

pub mod info;
pub mod registry;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use info::TemplateInfo;
pub use registry::{FileRegistry, MemoryRegistry, TemplateStore};

/// Description stored when the user leaves the wizard's description empty.
pub const DEFAULT_DESCRIPTION: &str = "Custom template";

/// Remote source of a template: a repository location plus a branch/ref.
///
/// The repository location may be any transport form git understands
/// (SSH `git@host:org/repo`, HTTPS URL, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSource {
    pub repo: String,
    pub branch: String,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.branch)
    }
}

/// A named, reusable scaffold source configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Display label shown in the selection prompt.
    pub title: String,

    /// Where to clone from.
    pub source: TemplateSource,

    /// Free-text description, placeholder when left empty.
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl TemplateDefinition {
    pub fn new(title: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: TemplateSource {
                repo: repo.into(),
                branch: branch.into(),
            },
            description: default_description(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.description = description;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_falls_back_to_placeholder() {
        let def = TemplateDefinition::new("Starter", "git@github.com:org/starter", "main")
            .with_description("   ");
        assert_eq!(def.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn description_survives_serde_round_trip() {
        let def = TemplateDefinition::new("Starter", "git@github.com:org/starter", "main")
            .with_description("Vite + React starter");
        let json = serde_json::to_string(&def).unwrap();
        let back: TemplateDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn missing_description_deserializes_to_placeholder() {
        let json = r#"{"title":"Starter","source":{"repo":"git@github.com:org/starter","branch":"main"}}"#;
        let def: TemplateDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.description, DEFAULT_DESCRIPTION);
    }
}
