//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product binary implements to
//! configure the scaffolding behavior for its specific needs.

use crate::runtime::package_manager::PackageManager;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The registry namespace its templates persist under
/// - Post-setup instructions when a template ships no metadata
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, config namespace)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Suggested project name for the name prompt
    fn default_project_name(&self) -> &'static str {
        "my-app"
    }

    /// Branch suggestion offered by the configuration wizard
    fn default_branch(&self) -> &'static str {
        "main"
    }

    /// Generic "next steps" shown when the scaffolded template carries no
    /// metadata file. `installed` reflects whether a dependency install
    /// already ran, so the install instruction can be dropped.
    fn fallback_next_steps(
        &self,
        project_name: &str,
        manager: Option<PackageManager>,
        installed: bool,
    ) -> Vec<String> {
        let pm = manager.map(|m| m.command()).unwrap_or("npm");
        let mut steps = vec![format!("cd {}", project_name)];
        if !installed {
            steps.push(format!("{} install", pm));
        }
        steps.push(format!("{} run dev", pm));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test-scaffold"
        }
        fn display_name(&self) -> &'static str {
            "Test Scaffold"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn fallback_steps_skip_install_when_already_installed() {
        let steps = TestProduct.fallback_next_steps("my-app", Some(PackageManager::Pnpm), true);
        assert_eq!(steps, vec!["cd my-app", "pnpm run dev"]);
    }

    #[test]
    fn fallback_steps_include_install_otherwise() {
        let steps = TestProduct.fallback_next_steps("my-app", None, false);
        assert_eq!(steps, vec!["cd my-app", "npm install", "npm run dev"]);
    }
}
