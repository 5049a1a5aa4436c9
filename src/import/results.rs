//! Results page state
//!
//! `ImportResults` is the state behind one results page: every resource paired
//! with its creation status, and whether the batch call is still in flight.
//! The page starts with every row `Creating`, settles exactly once, and from
//! then on only answers questions (banner, rows, retry candidates).

use super::ImportError;
use super::settlement::{Settlement, status_from_settlement};
use crate::models::{ImportEntry, ImportResource, ImportStatus};

/// Message for rows the creator returned no settlement for
const MISSING_RESULT_MESSAGE: &str = "Error: no result returned";

/// Lifecycle of a results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportPhase {
    InFlight,
    Settled,
}

/// Banner shown above the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    InProgress,
    Succeeded,
    Failed,
}

impl PageStatus {
    pub fn from_flags(errors: bool, in_flight: bool) -> Self {
        if in_flight {
            PageStatus::InProgress
        } else if !errors {
            PageStatus::Succeeded
        } else {
            PageStatus::Failed
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageStatus::InProgress => "Creating resources...",
            PageStatus::Succeeded => "Resources successfully created",
            PageStatus::Failed => "One or more resources failed to be created",
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow<'a> {
    /// Type reference used for the resource link (`group~version~kind`)
    pub reference: String,
    pub kind_abbr: String,
    pub name: String,
    pub namespace: Option<String>,
    /// Whether the name links to the created object
    pub linkable: bool,
    pub status: &'a ImportStatus,
}

/// State of one results page
#[derive(Debug, Clone)]
pub struct ImportResults {
    entries: Vec<ImportEntry>,
    phase: ImportPhase,
}

impl ImportResults {
    /// Mount a page over `resources`; every row starts out `Creating`
    pub fn new(resources: Vec<ImportResource>) -> Self {
        Self {
            entries: resources.into_iter().map(ImportEntry::pending).collect(),
            phase: ImportPhase::InFlight,
        }
    }

    pub fn entries(&self) -> &[ImportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_flight(&self) -> bool {
        self.phase == ImportPhase::InFlight
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.status.error())
    }

    pub fn page_status(&self) -> PageStatus {
        PageStatus::from_flags(self.has_errors(), self.in_flight())
    }

    /// Apply the outcome of the batch call
    ///
    /// Settlements are matched to rows by position. Every status is replaced
    /// in one pass; rows without a settlement are marked failed and surplus
    /// settlements are dropped.
    pub fn settle(&mut self, settlements: Vec<Settlement>) -> Result<(), ImportError> {
        if self.phase == ImportPhase::Settled {
            return Err(ImportError::AlreadySettled);
        }

        if settlements.len() != self.entries.len() {
            tracing::warn!(
                "Creator returned {} results for {} resources",
                settlements.len(),
                self.entries.len()
            );
        }

        let mut settlements = settlements.into_iter();
        let statuses: Vec<ImportStatus> = self
            .entries
            .iter()
            .map(|_| match settlements.next() {
                Some(settlement) => status_from_settlement(settlement),
                None => ImportStatus::Failed {
                    message: MISSING_RESULT_MESSAGE.to_string(),
                },
            })
            .collect();

        for (entry, status) in self.entries.iter_mut().zip(statuses) {
            entry.status = status;
        }
        self.phase = ImportPhase::Settled;

        tracing::debug!(
            "Import settled: {} resources, errors={}",
            self.entries.len(),
            self.has_errors()
        );
        Ok(())
    }

    /// Original resources whose creation failed, in their original order
    pub fn failed_resources(&self) -> Vec<ImportResource> {
        self.entries
            .iter()
            .filter(|e| e.status.error())
            .map(|e| e.resource.clone())
            .collect()
    }

    /// Whether the "retry failed resources" action is offered
    pub fn can_retry(&self) -> bool {
        !self.in_flight() && self.has_errors()
    }

    /// Whether the "import more YAML" action is offered
    pub fn can_import_more(&self) -> bool {
        !self.in_flight()
    }

    pub fn rows(&self) -> Vec<ResultRow<'_>> {
        self.entries
            .iter()
            .map(|entry| {
                let resource = entry.displayed_resource();
                ResultRow {
                    reference: resource.reference(),
                    kind_abbr: resource.kind_abbr(),
                    name: resource.display_name(),
                    namespace: resource.namespace().map(String::from),
                    linkable: !self.in_flight() && !entry.status.error(),
                    status: &entry.status,
                }
            })
            .collect()
    }

    /// Created object for a row, when that row links anywhere
    pub fn linked_result(&self, index: usize) -> Option<&ImportResource> {
        if self.in_flight() {
            return None;
        }
        self.entries.get(index).and_then(|e| e.status.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn named(name: &str) -> ImportResource {
        ImportResource::new(
            "v1",
            "ConfigMap",
            ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_page_status_from_flags() {
        assert_eq!(PageStatus::from_flags(false, true), PageStatus::InProgress);
        assert_eq!(PageStatus::from_flags(true, true), PageStatus::InProgress);
        assert_eq!(PageStatus::from_flags(false, false), PageStatus::Succeeded);
        assert_eq!(PageStatus::from_flags(true, false), PageStatus::Failed);
    }

    #[test]
    fn test_new_page_is_in_flight() {
        let results = ImportResults::new(vec![named("a"), named("b")]);
        assert!(results.in_flight());
        assert_eq!(results.page_status(), PageStatus::InProgress);
        assert!(results.entries().iter().all(|e| e.status.creating()));
        assert!(!results.can_retry());
        assert!(!results.can_import_more());
        assert!(results.rows().iter().all(|r| !r.linkable));
    }

    #[test]
    fn test_settle_twice_is_rejected() {
        let mut results = ImportResults::new(vec![named("a")]);
        results
            .settle(vec![Settlement::Fulfilled(named("a"))])
            .unwrap();
        let err = results
            .settle(vec![Settlement::Rejected("Error 500: late".to_string())])
            .unwrap_err();
        assert!(matches!(err, ImportError::AlreadySettled));
        assert_eq!(results.entries()[0].status.message(), "Created");
    }

    #[test]
    fn test_missing_settlements_mark_rows_failed() {
        let mut results = ImportResults::new(vec![named("a"), named("b")]);
        results
            .settle(vec![Settlement::Fulfilled(named("a"))])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results.entries()[1].status.message(),
            "Error: no result returned"
        );
        assert_eq!(results.failed_resources(), vec![named("b")]);
    }

    #[test]
    fn test_surplus_settlements_are_dropped() {
        let mut results = ImportResults::new(vec![named("a")]);
        results
            .settle(vec![
                Settlement::Fulfilled(named("a")),
                Settlement::Rejected("Error 500: extra".to_string()),
            ])
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results.has_errors());
    }

    #[test]
    fn test_linked_result_only_for_created_rows() {
        let mut results = ImportResults::new(vec![named("a"), named("b")]);
        assert!(results.linked_result(0).is_none());

        results
            .settle(vec![
                Settlement::Fulfilled(named("a")),
                Settlement::Rejected("Error 409: exists".to_string()),
            ])
            .unwrap();
        assert_eq!(results.linked_result(0), Some(&named("a")));
        assert!(results.linked_result(1).is_none());
        assert!(results.linked_result(5).is_none());
    }

    #[test]
    fn test_empty_batch_settles_clean() {
        let mut results = ImportResults::new(Vec::new());
        results.settle(Vec::new()).unwrap();
        assert!(results.is_empty());
        assert_eq!(results.page_status(), PageStatus::Succeeded);
        assert!(results.can_import_more());
    }
}
