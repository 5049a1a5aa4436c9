//! kimport library
//!
//! Parses multi-document YAML manifests, creates the resources they describe
//! in a Kubernetes cluster as one batch, and presents per-resource outcomes.
//! The binary drives it through a TUI or a plain-text report; tests use it
//! directly.

pub mod cli;
pub mod config;
pub mod import;
pub mod kube;
pub mod models;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use import::{
    ImportResults, KubeResourceCreator, PageStatus, ResourceCreator, Settlement, run_import,
};
pub use models::{ImportEntry, ImportResource, ImportStatus, load_manifests, parse_manifests};
pub use report::render_report;
