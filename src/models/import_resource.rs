//! Import resource definitions
//!
//! An `ImportResource` is one parsed manifest document: the type information,
//! the object metadata and the rest of the object as free-form JSON. It is
//! never mutated once parsed; the server's response to a create call is kept
//! as a separate `ImportResource`.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::{DynamicObject, GroupVersionKind, TypeMeta};
use serde::{Deserialize, Serialize};

/// One resource to be created in the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResource {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Everything else in the document (spec, data, rules, ...)
    #[serde(flatten)]
    pub data: serde_json::Value,
}

impl ImportResource {
    /// Build a resource from its type and metadata with no other fields
    pub fn new(api_version: &str, kind: &str, metadata: ObjectMeta) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            metadata,
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// API group and version, split from `apiVersion`
    ///
    /// Core resources (`apiVersion: v1`) have an empty group.
    pub fn group_version(&self) -> (&str, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", self.api_version.as_str()),
        }
    }

    pub fn gvk(&self) -> GroupVersionKind {
        let (group, version) = self.group_version();
        GroupVersionKind::gvk(group, version, &self.kind)
    }

    /// Name shown for the resource
    ///
    /// Falls back to `generateName` followed by an ellipsis when the resource
    /// has no name yet (the server assigns it on creation).
    pub fn display_name(&self) -> String {
        let name = self.metadata.name.as_deref().unwrap_or_default();
        match self.metadata.generate_name.as_deref() {
            Some(prefix) if name.is_empty() => format!("{}...", prefix),
            _ => name.to_string(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Stable reference for the resource's type
    ///
    /// Core kinds are referenced by kind alone; everything else uses
    /// `group~version~kind`.
    pub fn reference(&self) -> String {
        let (group, version) = self.group_version();
        if group.is_empty() {
            self.kind.clone()
        } else {
            format!("{}~{}~{}", group, version, self.kind)
        }
    }

    /// Short badge for the kind, e.g. "CM" for ConfigMap
    pub fn kind_abbr(&self) -> String {
        let capitals: String = self.kind.chars().filter(|c| c.is_ascii_uppercase()).collect();
        if capitals.chars().count() > 1 {
            return capitals;
        }
        self.kind
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    }

    /// Convert into the dynamic object sent to the API server
    pub fn to_dynamic(&self) -> DynamicObject {
        DynamicObject {
            types: Some(TypeMeta {
                api_version: self.api_version.clone(),
                kind: self.kind.clone(),
            }),
            metadata: self.metadata.clone(),
            data: self.data.clone(),
        }
    }

    /// Convert a server response back into an `ImportResource`
    ///
    /// Responses to create calls usually carry their type information; when
    /// they don't, the type of the request is used.
    pub fn from_dynamic(object: DynamicObject, request: &ImportResource) -> Self {
        let (api_version, kind) = match object.types {
            Some(types) => (types.api_version, types.kind),
            None => (request.api_version.clone(), request.kind.clone()),
        };
        Self {
            api_version,
            kind,
            metadata: object.metadata,
            data: object.data,
        }
    }
}
