//! Async operation management
//!
//! The results page hands its batch to the creator once, on a background
//! task, and the main loop polls for the settlements without blocking.

use super::core::App;
use crate::import::{ImportError, ImportTask, Settlement};

impl App {
    /// Submit the pending batch if the page is still waiting for one
    ///
    /// Returns true when a call was started.
    pub fn trigger_import(&mut self) -> bool {
        if self.import_state.task.is_some() {
            return false;
        }
        if !self.results().is_some_and(|r| r.in_flight()) {
            return false;
        }
        let Some(creator) = self.creator.clone() else {
            return false;
        };
        let Some(resources) = self.import_state.pending.take() else {
            return false;
        };

        tracing::info!("Submitting {} resources for creation", resources.len());
        self.import_state.task = Some(ImportTask::spawn(creator, resources));
        true
    }

    /// Start the pending call and settle the page once it returns
    ///
    /// Returns true when the page settled during this poll.
    pub fn poll_import(&mut self) -> bool {
        self.trigger_import();

        let Some(task) = self.import_state.task.as_mut() else {
            return false;
        };
        let Some(outcome) = task.try_take() else {
            return false;
        };
        self.import_state.task = None;

        match outcome {
            Ok(settlements) => self.apply_settlements(settlements),
            Err(e) => {
                tracing::warn!("Batch creation failed: {}", e);
                self.apply_settlements(Vec::new());
                self.set_status_message((format!("Import failed: {}", e), true));
            }
        }
        true
    }

    /// Settle the mounted page with the outcome of its batch call
    pub fn apply_settlements(&mut self, settlements: Vec<Settlement>) {
        self.import_state.pending = None;
        let Some(results) = self.import_state.results.as_mut() else {
            tracing::debug!("Dropping settlements for a page that is gone");
            return;
        };

        match results.settle(settlements) {
            Ok(()) => {
                let failed = results.failed_resources().len();
                let total = results.len();
                if failed > 0 {
                    self.set_status_message((
                        format!("{} of {} resources failed", failed, total),
                        true,
                    ));
                } else {
                    self.set_status_message((format!("Created {} resources", total), false));
                }
            }
            Err(ImportError::AlreadySettled) => {
                tracing::warn!("Ignoring settlements for a page that already settled");
            }
            Err(e) => tracing::warn!("Failed to settle import: {}", e),
        }
    }
}
