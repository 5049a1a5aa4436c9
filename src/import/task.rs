//! Background batch creation task
//!
//! A results page fires its batch call exactly once, when it is mounted. The
//! call runs on a tokio task and its settlements come back over a oneshot
//! channel that the UI loop polls without blocking. Dropping the task aborts
//! the call, so a page that is torn down never receives a late update.

use super::ImportError;
use super::creator::ResourceCreator;
use super::settlement::Settlement;
use crate::models::ImportResource;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

/// Handle to an outstanding batch creation call
pub struct ImportTask {
    handle: JoinHandle<()>,
    rx: oneshot::Receiver<Vec<Settlement>>,
}

impl ImportTask {
    /// Spawn the batch call on the current tokio runtime
    pub fn spawn(creator: Arc<dyn ResourceCreator>, resources: Vec<ImportResource>) -> Self {
        let (tx, rx) = oneshot::channel();
        let count = resources.len();

        let handle = tokio::spawn(async move {
            let settlements = creator.create_resources(resources).await;
            tracing::debug!(
                "Batch creation finished: {} settlements for {} resources",
                settlements.len(),
                count
            );
            // The receiver is gone when the page was torn down meanwhile
            let _ = tx.send(settlements);
        });

        Self { handle, rx }
    }

    /// Take the settlements if the call has finished
    pub fn try_take(&mut self) -> Option<Result<Vec<Settlement>, ImportError>> {
        match self.rx.try_recv() {
            Ok(settlements) => Some(Ok(settlements)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(ImportError::TaskAborted)),
        }
    }

    /// Wait for the settlements
    pub async fn wait(&mut self) -> Result<Vec<Settlement>, ImportError> {
        (&mut self.rx).await.map_err(|_| ImportError::TaskAborted)
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for ImportTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("Aborting outstanding batch creation call");
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::creator::MockResourceCreator;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use std::time::Duration;

    fn named(name: &str) -> ImportResource {
        ImportResource::new(
            "v1",
            "Secret",
            ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_task_delivers_settlements_once() {
        let mut creator = MockResourceCreator::new();
        creator
            .expect_create_resources()
            .times(1)
            .returning(|resources| {
                resources
                    .into_iter()
                    .map(Settlement::Fulfilled)
                    .collect()
            });

        let mut task = ImportTask::spawn(Arc::new(creator), vec![named("a"), named("b")]);
        let settlements = task.wait().await.unwrap();
        assert_eq!(settlements.len(), 2);
        assert!(settlements.iter().all(Settlement::is_fulfilled));
    }

    #[tokio::test]
    async fn test_try_take_is_empty_until_finished() {
        let mut creator = MockResourceCreator::new();
        creator
            .expect_create_resources()
            .returning(|_| vec![Settlement::Rejected("Error 403: forbidden".to_string())]);

        let mut task = ImportTask::spawn(Arc::new(creator), vec![named("a")]);
        let mut polled = None;
        for _ in 0..100 {
            if let Some(result) = task.try_take() {
                polled = Some(result);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let settlements = polled.expect("task should finish").unwrap();
        assert_eq!(
            settlements,
            vec![Settlement::Rejected("Error 403: forbidden".to_string())]
        );
    }

    #[tokio::test]
    async fn test_aborted_task_reports_aborted() {
        struct Stalled;

        #[async_trait::async_trait]
        impl ResourceCreator for Stalled {
            async fn create_resources(&self, _resources: Vec<ImportResource>) -> Vec<Settlement> {
                std::future::pending().await
            }
        }

        let mut task = ImportTask::spawn(Arc::new(Stalled), vec![named("a")]);
        assert!(task.try_take().is_none());

        task.abort();
        let result = task.wait().await;
        assert!(matches!(result, Err(ImportError::TaskAborted)));
    }
}
