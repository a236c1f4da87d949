//! Package-manager detection and dependency installation

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Supported package managers, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// Probe priority: first available wins.
    pub const PRIORITY: [PackageManager; 4] = [
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
        PackageManager::Npm,
    ];

    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Detect the first available package manager on the host.
///
/// Each candidate is invoked with `--version` and suppressed output; an
/// unresolvable executable is a non-fatal miss and the next candidate is
/// tried. Pure query, no mutation.
pub fn detect() -> Option<PackageManager> {
    detect_with(probe)
}

/// Detection with an injected probe, for tests.
pub fn detect_with(probe: impl Fn(PackageManager) -> bool) -> Option<PackageManager> {
    PackageManager::PRIORITY.into_iter().find(|pm| probe(*pm))
}

fn probe(pm: PackageManager) -> bool {
    Command::new(pm.command())
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Run `<pm> install` in `project_dir` with inherited standard I/O so the
/// user sees live output. Returns whether the install exited successfully;
/// a spawn failure (executable vanished between probe and install) is an
/// error, a non-zero exit is `Ok(false)` for the caller to warn about.
pub async fn install(pm: PackageManager, project_dir: &Path) -> Result<bool> {
    let status = tokio::process::Command::new(pm.command())
        .arg("install")
        .current_dir(project_dir)
        .status()
        .await
        .with_context(|| format!("Failed to run `{} install`", pm.command()))?;
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_successful_probe_wins() {
        let detected = detect_with(|pm| matches!(pm, PackageManager::Yarn | PackageManager::Npm));
        assert_eq!(detected, Some(PackageManager::Yarn));
    }

    #[test]
    fn priority_order_is_respected_when_all_available() {
        let detected = detect_with(|_| true);
        assert_eq!(detected, Some(PackageManager::Pnpm));
    }

    #[test]
    fn none_iff_all_probes_fail() {
        assert_eq!(detect_with(|_| false), None);
    }
}
