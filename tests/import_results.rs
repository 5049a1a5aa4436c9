//! Results page behaviour
//!
//! Drives `ImportResults` and `run_import` end to end with an in-memory
//! creator: row order, banner state, links and retry candidates.

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kimport::import::{ImportResults, PageStatus, ResourceCreator, Settlement, run_import};
use kimport::models::{ImportResource, ImportStatus};
use std::sync::{Arc, Mutex};

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

fn generated(prefix: &str) -> ImportResource {
    ImportResource::new(
        "v1",
        "Pod",
        ObjectMeta {
            generate_name: Some(prefix.to_string()),
            ..Default::default()
        },
    )
}

/// Creator that rejects resources whose name appears in `reject`
/// and records every batch it receives
struct FakeCreator {
    reject: Vec<String>,
    batches: Mutex<Vec<Vec<ImportResource>>>,
}

impl FakeCreator {
    fn rejecting(names: &[&str]) -> Self {
        Self {
            reject: names.iter().map(|n| n.to_string()).collect(),
            batches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResourceCreator for FakeCreator {
    async fn create_resources(&self, resources: Vec<ImportResource>) -> Vec<Settlement> {
        self.batches.lock().unwrap().push(resources.clone());
        resources
            .into_iter()
            .map(|r| {
                if self.reject.contains(&r.display_name()) {
                    Settlement::Rejected(format!("Error 409: {} already exists", r.display_name()))
                } else {
                    Settlement::Fulfilled(r)
                }
            })
            .collect()
    }
}

#[test]
fn test_example_batch_statuses_and_retry_candidates() {
    let a = named("a");
    let gen_pod = generated("gen-");
    let mut results = ImportResults::new(vec![a.clone(), gen_pod.clone()]);

    results
        .settle(vec![
            Settlement::Fulfilled(a.clone()),
            Settlement::Rejected("Error 409: boom".to_string()),
        ])
        .unwrap();

    let entries = results.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].status.message(), "Created");
    assert!(!entries[0].status.error());
    assert!(entries[1].status.error());
    assert_eq!(entries[1].status.message(), "Error: boom");
    assert_eq!(results.failed_resources(), vec![gen_pod]);
}

#[test]
fn test_rejection_trim_is_fixed_width() {
    let mut results = ImportResults::new(vec![named("a"), named("b")]);
    results
        .settle(vec![
            Settlement::Rejected("Error 12345: boom".to_string()),
            Settlement::Rejected("short".to_string()),
        ])
        .unwrap();

    // Eleven characters go regardless of what they are
    assert_eq!(results.entries()[0].status.message(), "Error: : boom");
    assert_eq!(results.entries()[1].status.message(), "Error: ");
}

#[test]
fn test_statuses_match_input_order() {
    let names = ["a", "b", "c", "d", "e"];
    let resources: Vec<_> = names.iter().map(|n| named(n)).collect();
    let mut results = ImportResults::new(resources.clone());

    let settlements = resources
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i % 2 == 0 {
                Settlement::Fulfilled(r.clone())
            } else {
                Settlement::Rejected(format!("Error 422: {} invalid", r.display_name()))
            }
        })
        .collect();
    results.settle(settlements).unwrap();

    assert_eq!(results.len(), names.len());
    for (i, entry) in results.entries().iter().enumerate() {
        assert_eq!(entry.resource.display_name(), names[i]);
        if i % 2 == 0 {
            assert_eq!(entry.status, ImportStatus::Created { result: named(names[i]) });
        } else {
            assert_eq!(
                entry.status.message(),
                format!("Error: {} invalid", names[i])
            );
        }
    }
    assert_eq!(results.failed_resources(), vec![named("b"), named("d")]);
}

#[test]
fn test_all_fulfilled_shows_success_without_retry() {
    let mut results = ImportResults::new(vec![named("a"), named("b")]);
    results
        .settle(vec![
            Settlement::Fulfilled(named("a")),
            Settlement::Fulfilled(named("b")),
        ])
        .unwrap();

    assert_eq!(results.page_status(), PageStatus::Succeeded);
    assert_eq!(results.page_status().title(), "Resources successfully created");
    assert!(!results.can_retry());
    assert!(results.can_import_more());
    assert!(results.failed_resources().is_empty());
    assert!(results.rows().iter().all(|r| r.linkable));
}

#[test]
fn test_any_rejection_shows_errors_with_retry() {
    let mut results = ImportResults::new(vec![named("a"), named("b")]);
    results
        .settle(vec![
            Settlement::Fulfilled(named("a")),
            Settlement::Rejected("Error 403: forbidden".to_string()),
        ])
        .unwrap();

    assert_eq!(results.page_status(), PageStatus::Failed);
    assert!(results.can_retry());
    let rows = results.rows();
    assert!(rows[0].linkable);
    assert!(!rows[1].linkable);
}

#[test]
fn test_in_flight_page_has_no_links() {
    let results = ImportResults::new(vec![named("a"), generated("gen-")]);

    assert_eq!(results.page_status(), PageStatus::InProgress);
    assert_eq!(results.page_status().title(), "Creating resources...");
    let rows = results.rows();
    assert!(rows.iter().all(|r| !r.linkable));
    assert!(rows.iter().all(|r| r.status.message() == "Creating"));
    assert_eq!(rows[1].name, "gen-...");
}

#[test]
fn test_created_row_shows_server_result() {
    let request = generated("gen-");
    let mut created = request.clone();
    created.metadata.name = Some("gen-x7k2p".to_string());
    created.metadata.namespace = Some("default".to_string());

    let mut results = ImportResults::new(vec![request]);
    results
        .settle(vec![Settlement::Fulfilled(created)])
        .unwrap();

    let rows = results.rows();
    assert_eq!(rows[0].name, "gen-x7k2p");
    assert_eq!(rows[0].namespace.as_deref(), Some("default"));
    assert_eq!(rows[0].kind_abbr, "P");
    assert_eq!(rows[0].reference, "Pod");
}

#[tokio::test]
async fn test_run_import_submits_whole_batch_once() {
    let creator = Arc::new(FakeCreator::rejecting(&["b"]));
    let resources = vec![named("a"), named("b"), named("c")];

    let results = run_import(creator.clone(), resources.clone()).await.unwrap();

    let batches = creator.batches.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], resources);
    assert!(!results.in_flight());
    assert_eq!(
        results.entries()[1].status.message(),
        "Error: b already exists"
    );
}

#[tokio::test]
async fn test_retry_submits_only_failed_subset() {
    let creator = Arc::new(FakeCreator::rejecting(&["b", "d"]));
    let resources = vec![named("a"), named("b"), named("c"), named("d")];

    let first = run_import(creator.clone(), resources).await.unwrap();
    let retry = first.failed_resources();
    let second = run_import(creator.clone(), retry).await.unwrap();

    let batches = creator.batches.lock().unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1], vec![named("b"), named("d")]);
    assert_eq!(second.len(), 2);
    // The first page is untouched by the retry
    assert_eq!(first.page_status(), PageStatus::Failed);
    assert_eq!(first.len(), 4);
}
