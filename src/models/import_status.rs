//! Per-resource creation status

use super::ImportResource;

/// Creation status of one imported resource
#[derive(Debug, Clone, PartialEq)]
pub enum ImportStatus {
    /// The batch call has not settled yet
    Creating,
    /// The server accepted the resource; `result` is what it returned
    Created { result: ImportResource },
    /// The server (or the client) rejected the resource
    Failed { message: String },
}

impl ImportStatus {
    pub fn creating(&self) -> bool {
        matches!(self, ImportStatus::Creating)
    }

    pub fn error(&self) -> bool {
        matches!(self, ImportStatus::Failed { .. })
    }

    pub fn result(&self) -> Option<&ImportResource> {
        match self {
            ImportStatus::Created { result } => Some(result),
            _ => None,
        }
    }

    /// Text shown next to the status icon
    pub fn message(&self) -> &str {
        match self {
            ImportStatus::Creating => "Creating",
            ImportStatus::Created { .. } => "Created",
            ImportStatus::Failed { message } => message,
        }
    }
}

/// A resource paired with its status
///
/// Keeping both in one record means a status can never be read against the
/// wrong resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportEntry {
    pub resource: ImportResource,
    pub status: ImportStatus,
}

impl ImportEntry {
    pub fn pending(resource: ImportResource) -> Self {
        Self {
            resource,
            status: ImportStatus::Creating,
        }
    }

    /// The resource to display: the server's copy once created, else the input
    pub fn displayed_resource(&self) -> &ImportResource {
        self.status.result().unwrap_or(&self.resource)
    }
}
