//! Import workflow
//!
//! Everything between "here are the parsed manifests" and "here is what the
//! cluster made of them":
//! - `creator.rs` - the batch creation seam and its Kubernetes implementation
//! - `settlement.rs` - per-resource outcomes and how they map to row statuses
//! - `results.rs` - the results page state (rows, banner, retry candidates)
//! - `task.rs` - the fire-once background call behind a results page

pub mod creator;
pub mod results;
pub mod settlement;
pub mod task;

pub use creator::{CreateError, KubeResourceCreator, ResourceCreator};
pub use results::{ImportResults, PageStatus, ResultRow};
pub use settlement::{REJECTION_PREFIX_LEN, Settlement, rejection_reason, status_from_settlement};
pub use task::ImportTask;

use thiserror::Error;

/// Errors raised by the results page lifecycle
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("import results have already settled")]
    AlreadySettled,

    #[error("batch creation task ended without a result")]
    TaskAborted,
}

/// Mount a results page and drive it to settlement without a UI
pub async fn run_import(
    creator: std::sync::Arc<dyn ResourceCreator>,
    resources: Vec<crate::models::ImportResource>,
) -> Result<ImportResults, ImportError> {
    let mut results = ImportResults::new(resources.clone());
    let mut task = ImportTask::spawn(creator, resources);
    let settlements = task.wait().await?;
    results.settle(settlements)?;
    Ok(results)
}
