//! Persistent template registry
//!
//! The registry is a small JSON document in the host-convention config
//! directory holding the ordered list of configured templates. Pure
//! persistence: no validation or network side effects live here. The store
//! is an injected dependency so the wizard and pipeline can be tested
//! against an in-memory implementation.

use super::TemplateDefinition;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name of the registry document inside the product's config dir.
const REGISTRY_FILE: &str = "templates.json";

/// Persistent store of configured templates.
///
/// An empty list is the EMPTY sentinel, never an error: callers branch to
/// onboarding when `load` comes back empty.
pub trait TemplateStore {
    /// Read the persisted list. Absent state reads as an empty list.
    fn load(&self) -> Result<Vec<TemplateDefinition>>;

    /// Replace the entire persisted list.
    fn save(&self, templates: &[TemplateDefinition]) -> Result<()>;

    /// Clear all persisted state.
    fn reset(&self) -> Result<()>;

    /// True iff `load` would return a non-empty list.
    fn has(&self) -> Result<bool> {
        Ok(!self.load()?.is_empty())
    }

    /// Where the store lives on disk, when it has a location to show.
    fn location(&self) -> Option<PathBuf> {
        None
    }

    /// Alternate seeding policy: when the store is empty, synthesize a
    /// single placeholder template, persist it, and return it. Otherwise
    /// behaves like `load`. Callers pick either this or the explicit-empty
    /// contract of `load`; the two policies are not meant to be mixed.
    fn load_or_seed_default(&self) -> Result<Vec<TemplateDefinition>> {
        let templates = self.load()?;
        if !templates.is_empty() {
            return Ok(templates);
        }
        let seeded = vec![placeholder_template()];
        self.save(&seeded)?;
        Ok(seeded)
    }
}

/// The placeholder definition used by the auto-seed policy.
pub fn placeholder_template() -> TemplateDefinition {
    TemplateDefinition::new(
        "Example starter (edit me)",
        "git@github.com:your-org/your-template",
        "main",
    )
    .with_description("Placeholder template. Replace it via the configuration menu.")
}

/// File-backed registry under the product's config directory.
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    /// Bind to the host-convention config directory for a product name,
    /// so repeated invocations of the tool find the same store.
    pub fn for_product(product_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("com", "create-ui-app", product_name)
            .context("Could not determine a config directory for this platform")?;
        Ok(Self {
            path: dirs.config_dir().join(REGISTRY_FILE),
        })
    }

    /// Bind to an explicit file path. Used by tests and by anything that
    /// wants a non-default store location.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateStore for FileRegistry {
    fn load(&self) -> Result<Vec<TemplateDefinition>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn save(&self, templates: &[TemplateDefinition]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(templates)?;
        // Write through a sibling temp file then rename, so a concurrent
        // reader never observes a partially written list.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

/// In-memory registry for tests and non-persistent flows.
#[derive(Default)]
pub struct MemoryRegistry {
    templates: Mutex<Vec<TemplateDefinition>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Vec<TemplateDefinition>) -> Self {
        Self {
            templates: Mutex::new(templates),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<TemplateDefinition>>> {
        self.templates
            .lock()
            .map_err(|_| anyhow::anyhow!("template registry lock poisoned"))
    }
}

impl TemplateStore for MemoryRegistry {
    fn load(&self) -> Result<Vec<TemplateDefinition>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, templates: &[TemplateDefinition]) -> Result<()> {
        *self.lock()? = templates.to_vec();
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}
