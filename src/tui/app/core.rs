//! Application state and main TUI logic

use super::state::{ImportState, UIState, View, ViewState};
use crate::import::{ImportResults, ResourceCreator};
use crate::models::{ImportResource, load_manifests};
use crate::tui::Theme;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Main application state
pub struct App {
    // Core data
    pub(crate) config: crate::config::Config,
    pub(crate) theme: Theme,
    pub(crate) context: String,
    pub(crate) namespace: String,

    // Organized state
    pub(crate) view_state: ViewState,
    pub(crate) ui_state: UIState,
    pub(crate) import_state: ImportState,

    // Services
    pub(crate) creator: Option<Arc<dyn ResourceCreator>>,
}

impl App {
    pub fn new(
        resources: Vec<ImportResource>,
        sources: Vec<PathBuf>,
        context: String,
        namespace: String,
        config: crate::config::Config,
        theme: Theme,
    ) -> Self {
        Self {
            config,
            theme,
            context,
            namespace,
            view_state: ViewState::default(),
            ui_state: UIState::default(),
            import_state: ImportState {
                sources,
                resources,
                ..Default::default()
            },
            creator: None,
        }
    }

    pub fn set_creator(&mut self, creator: Arc<dyn ResourceCreator>) {
        self.creator = Some(creator);
    }

    pub fn current_view(&self) -> View {
        self.view_state.current_view
    }

    pub fn set_view(&mut self, view: View) {
        self.view_state.current_view = view;
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn config(&self) -> &crate::config::Config {
        &self.config
    }

    pub fn resources(&self) -> &[ImportResource] {
        &self.import_state.resources
    }

    pub fn load_error(&self) -> Option<&str> {
        self.import_state.load_error.as_deref()
    }

    /// Mounted results page
    pub fn results(&self) -> Option<&ImportResults> {
        self.import_state.results.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.view_state.selected_index
    }

    /// Whether a batch call is waiting to be submitted or is outstanding
    pub fn import_outstanding(&self) -> bool {
        self.import_state.pending.is_some() || self.import_state.task.is_some()
    }

    /// Import everything on the input view
    pub fn start_import(&mut self) -> bool {
        if self.import_state.resources.is_empty() {
            self.set_status_message(("Nothing to import".to_string(), true));
            return false;
        }
        let resources = self.import_state.resources.clone();
        self.mount_results(resources);
        true
    }

    /// Show the results page, or tear it down and return to the input view
    pub fn display_results(&mut self, show: bool) {
        if show {
            if self.import_state.results.is_some() {
                self.set_view(View::ImportResults);
            }
            return;
        }

        if let Some(task) = self.import_state.task.take() {
            task.abort();
        }
        self.import_state.pending = None;
        self.import_state.results = None;
        self.view_state.yaml_index = None;
        self.reset_selection();
        self.set_view(View::ImportInput);
    }

    /// Mount a fresh results page for `resources`
    pub fn retry_failed(&mut self, resources: Vec<ImportResource>) {
        tracing::info!("Retrying {} failed resources", resources.len());
        self.mount_results(resources);
    }

    /// Retry the failed rows of the current page, when that action is offered
    pub fn retry_failed_from_page(&mut self) -> bool {
        let failed = match self.results() {
            Some(results) if results.can_retry() => results.failed_resources(),
            _ => return false,
        };
        self.retry_failed(failed);
        true
    }

    /// Return to the input view, when that action is offered
    pub fn import_more(&mut self) -> bool {
        if !self.results().is_some_and(|r| r.can_import_more()) {
            return false;
        }
        self.display_results(false);
        true
    }

    /// A new page replaces the old one; the old batch call is aborted
    fn mount_results(&mut self, resources: Vec<ImportResource>) {
        if let Some(task) = self.import_state.task.take() {
            task.abort();
        }
        self.import_state.results = Some(ImportResults::new(resources.clone()));
        self.import_state.pending = Some(resources);
        self.view_state.yaml_index = None;
        self.reset_selection();
        self.set_view(View::ImportResults);
    }

    /// Re-read the manifest sources
    pub fn reload_sources(&mut self) -> bool {
        if self
            .import_state
            .sources
            .iter()
            .any(|p| p.as_path() == Path::new("-"))
        {
            self.set_status_message(("Cannot reload manifests read from stdin".to_string(), true));
            return false;
        }

        match load_manifests(&self.import_state.sources) {
            Ok(resources) => {
                tracing::debug!("Reloaded {} resources", resources.len());
                self.set_status_message((format!("Loaded {} resources", resources.len()), false));
                self.import_state.resources = resources;
                self.import_state.load_error = None;
                self.reset_selection();
                true
            }
            Err(e) => {
                tracing::warn!("Failed to reload manifests: {}", e);
                self.set_status_message((format!("Failed to load manifests: {}", e), true));
                self.import_state.load_error = Some(e.to_string());
                false
            }
        }
    }

    /// Open the YAML view for the selected row when it links to a created object
    pub fn open_selected_result(&mut self) -> bool {
        let index = self.view_state.selected_index;
        if self.results().and_then(|r| r.linked_result(index)).is_none() {
            return false;
        }
        self.view_state.yaml_index = Some(index);
        self.view_state.yaml_scroll_offset = 0;
        self.set_view(View::ResourceYaml);
        true
    }

    /// Created object shown by the YAML view
    pub fn yaml_resource(&self) -> Option<&ImportResource> {
        let index = self.view_state.yaml_index?;
        self.results()?.linked_result(index)
    }

    /// Number of rows in the current table
    pub(crate) fn row_count(&self) -> usize {
        match self.view_state.current_view {
            View::ImportInput => self.import_state.resources.len(),
            View::ImportResults => self.results().map_or(0, |r| r.len()),
            View::ResourceYaml => 0,
        }
    }

    pub(crate) fn reset_selection(&mut self) {
        self.view_state.selected_index = 0;
        self.view_state.scroll_offset = 0;
    }

    /// Advance animations and expire the status message
    pub fn tick(&mut self) {
        self.ui_state.tick = self.ui_state.tick.wrapping_add(1);
        self.check_status_message_timeout();
    }

    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.ui_state.status_message = Some(message);
        self.ui_state.status_message_time = Some(std::time::Instant::now());
    }

    pub fn status_message(&self) -> Option<(&str, bool)> {
        self.ui_state
            .status_message
            .as_ref()
            .map(|(msg, is_error)| (msg.as_str(), *is_error))
    }

    pub(crate) fn clear_status_message(&mut self) {
        self.ui_state.status_message = None;
        self.ui_state.status_message_time = None;
    }

    pub fn check_status_message_timeout(&mut self) {
        use crate::tui::constants::STATUS_MESSAGE_TIMEOUT_SECS;
        if let Some(time) = self.ui_state.status_message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }

    /// Key hints for the footer of the current view
    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.view_state.current_view {
            View::ImportInput => vec![
                ("Enter", "Import"),
                ("r", "Reload"),
                ("j/k", "Navigate"),
                ("q", "Quit"),
            ],
            View::ImportResults => {
                let mut hints = vec![("j/k", "Navigate"), ("Enter", "YAML")];
                if let Some(results) = self.results() {
                    if results.can_retry() {
                        hints.push(("R", "Retry failed"));
                    }
                    if results.can_import_more() {
                        hints.push(("i", "Import more"));
                    }
                }
                hints.push(("q", "Quit"));
                hints
            }
            View::ResourceYaml => vec![("j/k", "Scroll"), ("Esc", "Back")],
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("context", &self.context)
            .field("namespace", &self.namespace)
            .field("view_state", &self.view_state)
            .field("ui_state", &self.ui_state)
            .field("import_state", &self.import_state)
            .field("creator", &self.creator.is_some())
            .finish()
    }
}
