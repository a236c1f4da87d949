//! Non-interactive stages of the scaffold pipeline
//!
//! `materialize` runs clone, history reset, and environment seeding for an
//! already-resolved target directory. Only the clone is fatal; the later
//! stages are best-effort and their failures come back as warnings for the
//! caller to render. Interactive stages (overwrite consent, dependency
//! install consent, metadata reporting) live in the prompt layer.

use crate::runtime::git;
use crate::templates::TemplateDefinition;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Example environment file copied to the conventional name when present.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// One interactive session's worth of scaffold input. Not persisted.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub template: TemplateDefinition,
}

/// What the non-interactive stages accomplished.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub target_dir: PathBuf,
    /// Fresh VCS state was initialized after stripping the template's history.
    pub history_reset: bool,
    /// `.env` was created from `.env.example`.
    pub env_seeded: bool,
    /// Best-effort stage failures, for the caller to log.
    pub warnings: Vec<String>,
}

/// Clone the template and post-process the working tree.
///
/// `target_dir` must already be resolved: either absent, or consented to be
/// replaced (in which case the caller removed it). A clone failure is fatal
/// and propagates as `ScaffoldError::Clone`; history reset and env seeding
/// failures are contained as warnings.
pub async fn materialize(
    request: &ScaffoldRequest,
    target_dir: &Path,
) -> Result<ScaffoldOutcome> {
    git::clone_template(&request.template.source, target_dir).await?;

    let mut outcome = ScaffoldOutcome {
        target_dir: target_dir.to_path_buf(),
        history_reset: false,
        env_seeded: false,
        warnings: Vec::new(),
    };

    match git::reset_history(target_dir).await {
        Ok(()) => outcome.history_reset = true,
        Err(err) => outcome
            .warnings
            .push(format!("Could not reinitialize git history: {:#}", err)),
    }

    match seed_env_file(target_dir) {
        Ok(seeded) => outcome.env_seeded = seeded,
        Err(err) => outcome
            .warnings
            .push(format!("Could not create {}: {:#}", ENV_FILE, err)),
    }

    Ok(outcome)
}

/// Copy `.env.example` to `.env` when the template ships one.
/// Absence is not an error; returns whether a copy happened.
pub fn seed_env_file(target_dir: &Path) -> Result<bool> {
    let example = target_dir.join(ENV_EXAMPLE_FILE);
    if !example.exists() {
        return Ok(false);
    }
    let env = target_dir.join(ENV_FILE);
    std::fs::copy(&example, &env)
        .with_context(|| format!("Failed to copy {} to {}", example.display(), env.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn env_example_is_copied_verbatim() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(ENV_EXAMPLE_FILE), "API_KEY=changeme\n").unwrap();

        assert!(seed_env_file(dir.path()).unwrap());
        let seeded = std::fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();
        assert_eq!(seeded, "API_KEY=changeme\n");
    }

    #[test]
    fn missing_env_example_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(!seed_env_file(dir.path()).unwrap());
        assert!(!dir.path().join(ENV_FILE).exists());
    }
}
