//! Host tooling: package-manager detection and git invocations
//!
//! This module provides:
//! - Package-manager probing in priority order
//! - Shallow template clones and fresh history initialization
//!
//! Two distinct child-process contracts live here: silent, failure-tolerant
//! probes (`--version` checks) and real work that streams output to the
//! user (clone, install).

pub mod git;
pub mod package_manager;

pub use git::{clone_template, reset_history};
pub use package_manager::{detect, PackageManager};
