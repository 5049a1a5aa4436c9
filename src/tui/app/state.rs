//! Application state structures
//!
//! State sub-structures that group the App's fields by concern.

use crate::import::{ImportResults, ImportTask};
use crate::models::ImportResource;
use std::path::PathBuf;

/// View types for the application
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    /// Parsed manifests waiting to be imported
    ImportInput,
    /// Results page of the current batch
    ImportResults,
    /// YAML of one created resource
    ResourceYaml,
}

/// Navigation and scrolling
#[derive(Debug)]
pub struct ViewState {
    pub current_view: View,
    /// Selected row in the current table
    pub selected_index: usize,
    /// Scroll offset for the current table
    pub scroll_offset: usize,
    /// Scroll offset for the YAML view
    pub yaml_scroll_offset: usize,
    /// Results row whose YAML is shown
    pub yaml_index: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_view: View::ImportInput,
            selected_index: 0,
            scroll_offset: 0,
            yaml_scroll_offset: 0,
            yaml_index: None,
        }
    }
}

/// Status line and animation state
#[derive(Debug, Default)]
pub struct UIState {
    /// Status message to display (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// When status message was set (for auto-clearing)
    pub status_message_time: Option<std::time::Instant>,
    /// Advances once per loop iteration; drives spinners
    pub tick: usize,
}

/// Manifests and the results page built from them
#[derive(Default)]
pub struct ImportState {
    /// Files the manifests were read from (`-` is stdin)
    pub sources: Vec<PathBuf>,
    /// Resources the input view would import
    pub resources: Vec<ImportResource>,
    /// Last manifest load failure
    pub load_error: Option<String>,
    /// Mounted results page, if any
    pub results: Option<ImportResults>,
    /// Batch waiting to be handed to the creator
    pub pending: Option<Vec<ImportResource>>,
    /// Outstanding batch call for the mounted page
    pub task: Option<ImportTask>,
}

impl std::fmt::Debug for ImportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportState")
            .field("sources", &self.sources)
            .field("resources", &self.resources.len())
            .field("load_error", &self.load_error)
            .field("results", &self.results.as_ref().map(|r| r.len()))
            .field("pending", &self.pending.as_ref().map(|p| p.len()))
            .field("task", &self.task.is_some())
            .finish()
    }
}
