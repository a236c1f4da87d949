//! Non-interactive directory-name conflict resolution
//!
//! Used on the `--yes` path, where no overwrite prompt is available. The
//! interactive path uses explicit overwrite consent instead; the two
//! policies are never combined in one run.

use std::path::Path;

/// Resolve `base_name` to a name with no existing entry under `directory`.
///
/// Returns `base_name` unchanged when it is free, otherwise probes
/// `base_name-1`, `base_name-2`, ... until an unused name is found.
/// No side effects: nothing is created.
pub fn resolve_unique(base_name: &str, directory: &Path) -> String {
    if !directory.join(base_name).exists() {
        return base_name.to_string();
    }
    let mut suffix = 1u32;
    loop {
        let candidate = format!("{}-{}", base_name, suffix);
        if !directory.join(&candidate).exists() {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn free_name_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_unique("my-app", dir.path()), "my-app");
    }

    #[test]
    fn conflict_gets_first_free_suffix() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("my-app")).unwrap();
        assert_eq!(resolve_unique("my-app", dir.path()), "my-app-1");
    }

    #[test]
    fn suffixes_increase_past_existing_entries() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("my-app")).unwrap();
        std::fs::create_dir(dir.path().join("my-app-1")).unwrap();
        // Files count as conflicts too, not only directories.
        std::fs::write(dir.path().join("my-app-2"), "").unwrap();
        assert_eq!(resolve_unique("my-app", dir.path()), "my-app-3");
    }

    #[test]
    fn resolution_creates_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("my-app")).unwrap();
        let resolved = resolve_unique("my-app", dir.path());
        assert!(!dir.path().join(resolved).exists());
    }
}
