//! Post-clone template metadata
//!
//! Templates may ship a `.template-info.json` at their root describing
//! themselves for richer post-scaffold reporting. The file is owned by the
//! template author and consumed read-only; a missing or malformed file is
//! never an error at this layer (the caller treats parse failures as a
//! best-effort warning).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Metadata file name at the scaffolded project's root.
pub const TEMPLATE_INFO_FILE: &str = ".template-info.json";

/// Manifest file probed for script entries.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

/// Script name that marks a template as supporting AI-assisted releases.
pub const AI_RELEASE_SCRIPT: &str = "ai-release";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub variant: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub post_install: PostInstall,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInstall {
    #[serde(default)]
    pub steps: Vec<String>,
}

impl TemplateInfo {
    /// Read `.template-info.json` from a scaffolded directory.
    /// Returns `Ok(None)` when the template ships no metadata.
    pub fn load(project_dir: &Path) -> Result<Option<Self>> {
        let path = project_dir.join(TEMPLATE_INFO_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let info = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(info))
    }

    /// Post-install steps still worth showing. When dependencies were
    /// already installed, install instructions are redundant and dropped.
    pub fn remaining_steps(&self, deps_installed: bool) -> Vec<&str> {
        self.post_install
            .steps
            .iter()
            .filter(|step| !(deps_installed && step.to_lowercase().contains("install")))
            .map(String::as_str)
            .collect()
    }
}

/// Check the package manifest for the AI-assisted release script.
pub fn has_ai_release_script(project_dir: &Path) -> bool {
    let path = project_dir.join(PACKAGE_MANIFEST_FILE);
    let Ok(content) = std::fs::read_to_string(&path) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&content) else {
        return false;
    };
    manifest
        .get("scripts")
        .and_then(|scripts| scripts.get(AI_RELEASE_SCRIPT))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_INFO: &str = r#"{
        "name": "React Starter",
        "variant": "vite",
        "description": "Opinionated React setup",
        "features": ["TypeScript", "Tailwind"],
        "postInstall": { "steps": ["npm install", "npm run dev"] }
    }"#;

    #[test]
    fn parses_camel_case_metadata() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(TEMPLATE_INFO_FILE), SAMPLE_INFO).unwrap();

        let info = TemplateInfo::load(dir.path()).unwrap().unwrap();
        assert_eq!(info.name, "React Starter");
        assert_eq!(info.variant.as_deref(), Some("vite"));
        assert_eq!(info.features, vec!["TypeScript", "Tailwind"]);
        assert_eq!(info.post_install.steps.len(), 2);
    }

    #[test]
    fn missing_metadata_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(TemplateInfo::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn install_steps_filtered_after_install() {
        let info: TemplateInfo = serde_json::from_str(SAMPLE_INFO).unwrap();
        assert_eq!(info.remaining_steps(true), vec!["npm run dev"]);
        assert_eq!(
            info.remaining_steps(false),
            vec!["npm install", "npm run dev"]
        );
    }

    #[test]
    fn detects_ai_release_script() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PACKAGE_MANIFEST_FILE),
            r#"{"scripts": {"dev": "vite", "ai-release": "release-bot run"}}"#,
        )
        .unwrap();
        assert!(has_ai_release_script(dir.path()));
    }

    #[test]
    fn no_manifest_means_no_ai_release() {
        let dir = TempDir::new().unwrap();
        assert!(!has_ai_release_script(dir.path()));

        std::fs::write(
            dir.path().join(PACKAGE_MANIFEST_FILE),
            r#"{"scripts": {"dev": "vite"}}"#,
        )
        .unwrap();
        assert!(!has_ai_release_script(dir.path()));
    }
}
