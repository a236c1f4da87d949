//! Git invocations: shallow template clone and history reinitialization
//!
//! Clone strategy: a direct shallow, single-branch invocation of the git
//! binary. Transport failures of any kind (auth, host verification, unknown
//! host, network) surface as a single `ScaffoldError::Clone`, with a
//! remediation hint attached when the failure text points at an SSH
//! access problem.

use crate::error::ScaffoldError;
use crate::templates::TemplateSource;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Hint shown when clone failure text indicates an auth/host problem.
pub const SSH_ACCESS_HINT: &str =
    "Tip: Ensure you have SSH access to the repository if it is private.";

/// Stderr fragments that identify an auth or host-verification failure.
const AUTH_FAILURE_MARKERS: &[&str] = &[
    "permission denied",
    "publickey",
    "host key verification failed",
    "authentication failed",
    "could not read from remote repository",
];

/// Classify clone stderr: returns the SSH hint for auth/host failures.
pub fn auth_hint(stderr: &str) -> Option<&'static str> {
    let lowered = stderr.to_lowercase();
    AUTH_FAILURE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        .then_some(SSH_ACCESS_HINT)
}

/// Shallow-clone `source` into `target_dir`.
///
/// On failure no partial directory is left behind and the error carries the
/// trimmed stderr text plus an optional remediation hint.
pub async fn clone_template(source: &TemplateSource, target_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg("--single-branch")
        .arg("--branch")
        .arg(&source.branch)
        .arg(&source.repo)
        .arg(target_dir)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("Failed to invoke git; is it installed and on PATH?")?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut message = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .unwrap_or("git clone failed")
        .to_string();

    // git usually removes its own partial clone, but a directory left
    // behind would imply success on the next run. When the cleanup itself
    // fails, tell the user the leftover directory is stale.
    if target_dir.exists() {
        if let Err(cleanup_err) = std::fs::remove_dir_all(target_dir) {
            message.push_str(&stale_clone_note(target_dir, &cleanup_err));
        }
    }

    Err(ScaffoldError::Clone {
        repo: source.repo.clone(),
        branch: source.branch.clone(),
        message,
        hint: auth_hint(&stderr),
    }
    .into())
}

/// Note appended to a clone error when the partial directory could not be
/// removed: the leftover contents are stale, not a usable scaffold.
fn stale_clone_note(target_dir: &Path, cleanup_err: &std::io::Error) -> String {
    format!(
        " (a stale partial clone remains at {} and could not be removed: {})",
        target_dir.display(),
        cleanup_err
    )
}

/// Strip the cloned template's own history and initialize fresh VCS state.
///
/// Best-effort from the pipeline's point of view: the caller logs a warning
/// on failure and continues, since the scaffolded files are already usable.
pub async fn reset_history(target_dir: &Path) -> Result<()> {
    let git_dir = target_dir.join(".git");
    if git_dir.exists() {
        tokio::fs::remove_dir_all(&git_dir)
            .await
            .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
    }

    let status = Command::new("git")
        .arg("init")
        .current_dir(target_dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .context("Failed to invoke git init")?;

    if !status.success() {
        anyhow::bail!("git init exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_verification_failure_gets_hint() {
        let stderr = "Host key verification failed.\nfatal: Could not read from remote repository.";
        assert_eq!(auth_hint(stderr), Some(SSH_ACCESS_HINT));
    }

    #[test]
    fn publickey_failure_gets_hint() {
        let stderr = "git@github.com: Permission denied (publickey).";
        assert_eq!(auth_hint(stderr), Some(SSH_ACCESS_HINT));
    }

    #[test]
    fn generic_network_failure_has_no_hint() {
        let stderr = "fatal: unable to access 'https://example.com/repo/': Connection timed out";
        assert_eq!(auth_hint(stderr), None);
    }

    #[test]
    fn failed_cleanup_marks_the_leftover_directory_stale() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let note = stale_clone_note(Path::new("/work/my-app"), &err);
        assert!(note.contains("stale partial clone remains at /work/my-app"));
        assert!(note.contains("permission denied"));
    }
}
