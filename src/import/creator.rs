//! Batch resource creation
//!
//! `ResourceCreator` is the seam between the results page and the cluster:
//! it takes the whole batch and hands back one settlement per resource, in
//! request order. It never fails as a whole; each failure is reported in the
//! slot of the resource that caused it.

use super::settlement::{Settlement, rejection_reason};
use crate::models::ImportResource;
use async_trait::async_trait;
use futures::future::join_all;
use kube::api::{Api, PostParams};
use kube::core::DynamicObject;
use kube::discovery::{Scope, pinned_kind};
use thiserror::Error;

/// Errors raised while creating a single resource
#[derive(Error, Debug)]
pub enum CreateError {
    #[error("unable to resolve {kind} in {api_version}: {source}")]
    Discovery {
        api_version: String,
        kind: String,
        #[source]
        source: kube::Error,
    },

    #[error("{0}")]
    Create(#[source] kube::Error),
}

impl CreateError {
    /// HTTP status returned by the API server, or 0 when there was none
    pub fn status_code(&self) -> u16 {
        let source = match self {
            CreateError::Discovery { source, .. } => source,
            CreateError::Create(source) => source,
        };
        match source {
            kube::Error::Api(status) => status.code,
            _ => 0,
        }
    }

    /// Human-readable detail without the status code
    pub fn detail(&self) -> String {
        match self {
            CreateError::Create(kube::Error::Api(status)) => status.message.clone(),
            other => other.to_string(),
        }
    }

    /// Rejection reason in the `"Error NNN: detail"` format
    pub fn rejection_reason(&self) -> String {
        rejection_reason(self.status_code(), &self.detail())
    }
}

/// Creates a batch of resources, returning one settlement per input in order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceCreator: Send + Sync {
    async fn create_resources(&self, resources: Vec<ImportResource>) -> Vec<Settlement>;
}

/// `ResourceCreator` backed by the Kubernetes API
pub struct KubeResourceCreator {
    client: kube::Client,
    default_namespace: String,
    dry_run: bool,
    field_manager: Option<String>,
}

impl KubeResourceCreator {
    pub fn new(client: kube::Client, default_namespace: impl Into<String>) -> Self {
        Self {
            client,
            default_namespace: default_namespace.into(),
            dry_run: false,
            field_manager: None,
        }
    }

    /// Ask the server to validate without persisting anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_field_manager(mut self, field_manager: impl Into<String>) -> Self {
        let field_manager = field_manager.into();
        self.field_manager = (!field_manager.is_empty()).then_some(field_manager);
        self
    }

    async fn create_one(&self, resource: &ImportResource) -> Result<ImportResource, CreateError> {
        let (api_resource, capabilities) = pinned_kind(&self.client, &resource.gvk())
            .await
            .map_err(|source| CreateError::Discovery {
                api_version: resource.api_version.clone(),
                kind: resource.kind.clone(),
                source,
            })?;

        let mut object = resource.to_dynamic();
        let api: Api<DynamicObject> = match capabilities.scope {
            Scope::Namespaced => {
                let namespace = resource
                    .namespace()
                    .unwrap_or(&self.default_namespace)
                    .to_string();
                object.metadata.namespace = Some(namespace.clone());
                Api::namespaced_with(self.client.clone(), &namespace, &api_resource)
            }
            Scope::Cluster => {
                object.metadata.namespace = None;
                Api::all_with(self.client.clone(), &api_resource)
            }
        };

        let params = PostParams {
            dry_run: self.dry_run,
            field_manager: self.field_manager.clone(),
        };
        let created = api
            .create(&params, &object)
            .await
            .map_err(CreateError::Create)?;

        Ok(ImportResource::from_dynamic(created, resource))
    }
}

#[async_trait]
impl ResourceCreator for KubeResourceCreator {
    async fn create_resources(&self, resources: Vec<ImportResource>) -> Vec<Settlement> {
        tracing::debug!(
            "Creating {} resources (dry_run={})",
            resources.len(),
            self.dry_run
        );

        let outcomes = join_all(resources.iter().map(|r| self.create_one(r))).await;

        resources
            .iter()
            .zip(outcomes)
            .map(|(resource, outcome)| match outcome {
                Ok(created) => {
                    tracing::info!(
                        "Created {} {}",
                        created.reference(),
                        created.display_name()
                    );
                    Settlement::Fulfilled(created)
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to create {} {}: {}",
                        resource.reference(),
                        resource.display_name(),
                        e
                    );
                    Settlement::Rejected(e.rejection_reason())
                }
            })
            .collect()
    }
}
