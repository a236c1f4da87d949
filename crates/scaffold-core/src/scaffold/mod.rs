//! The scaffold pipeline and its supporting pieces
//!
//! This module provides:
//! - Directory-name conflict resolution
//! - The staged materialization of a chosen template into a target directory

pub mod naming;
pub mod pipeline;

pub use naming::resolve_unique;
pub use pipeline::{materialize, ScaffoldOutcome, ScaffoldRequest};
