//! kimport model layer
//!
//! Structure:
//! - `import_resource.rs` - a parsed manifest document and its naming helpers
//! - `import_status.rs` - per-resource creation status and the paired entry record
//! - `manifest.rs` - multi-document YAML parsing and file loading

pub mod import_resource;
pub mod import_status;
pub mod manifest;

pub use import_resource::ImportResource;
pub use import_status::{ImportEntry, ImportStatus};
pub use manifest::{ManifestError, load_manifests, parse_manifests};
