//! Scaffold Core - Shared library for template-driven project scaffolding
//!
//! This library provides the core functionality for materializing projects from
//! user-configured git templates. It is designed to be used by thin CLI binaries
//! that plug in a product configuration but share the registry, wizard, and
//! pipeline logic.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template registry persistence, package-manager
//!   detection, naming resolution, git clone/init
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the scaffold
//!   pipeline (`scaffold::pipeline::materialize`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt modules
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::templates::registry::{FileRegistry, TemplateStore};
//!
//! let registry = FileRegistry::for_product("create-ui-app")?;
//! let templates = registry.load()?;
//! ```

pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use runtime::package_manager::PackageManager;
pub use scaffold::{ScaffoldOutcome, ScaffoldRequest};
pub use templates::registry::{FileRegistry, MemoryRegistry, TemplateStore};
pub use templates::{TemplateDefinition, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;
