//! YAML manifest parsing
//!
//! Turns multi-document YAML into `ImportResource`s, the way `kubectl create -f`
//! reads its input: documents are separated by `---`, empty documents are
//! skipped and `List` documents contribute their items.

use super::ImportResource;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("document {document}: invalid YAML: {source}")]
    Yaml {
        document: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document {document}: expected a mapping")]
    NotAnObject { document: usize },

    #[error("document {document}: missing required field `{field}`")]
    MissingField {
        document: usize,
        field: &'static str,
    },

    #[error("document {document}: {source}")]
    Decode {
        document: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse every resource in a multi-document YAML string
///
/// Document numbers in errors are 1-based and count every document,
/// including empty ones.
pub fn parse_manifests(text: &str) -> Result<Vec<ImportResource>, ManifestError> {
    let mut resources = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let document_number = index + 1;
        let value = serde_yaml::Value::deserialize(document).map_err(|source| {
            ManifestError::Yaml {
                document: document_number,
                source,
            }
        })?;

        if value.is_null() {
            continue;
        }

        let value = serde_json::to_value(&value).map_err(|source| ManifestError::Decode {
            document: document_number,
            source,
        })?;
        collect_resources(value, document_number, &mut resources)?;
    }

    tracing::debug!("Parsed {} resources from manifest", resources.len());
    Ok(resources)
}

fn collect_resources(
    value: serde_json::Value,
    document: usize,
    resources: &mut Vec<ImportResource>,
) -> Result<(), ManifestError> {
    let serde_json::Value::Object(mut object) = value else {
        return Err(ManifestError::NotAnObject { document });
    };

    let kind = object
        .get("kind")
        .and_then(|k| k.as_str())
        .filter(|k| !k.is_empty())
        .ok_or(ManifestError::MissingField {
            document,
            field: "kind",
        })?
        .to_string();

    if kind.ends_with("List") {
        if let Some(serde_json::Value::Array(items)) = object.remove("items") {
            for item in items {
                collect_resources(item, document, resources)?;
            }
            return Ok(());
        }
    }

    if object
        .get("apiVersion")
        .and_then(|v| v.as_str())
        .is_none_or(|v| v.is_empty())
    {
        return Err(ManifestError::MissingField {
            document,
            field: "apiVersion",
        });
    }

    let resource = serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|source| ManifestError::Decode { document, source })?;
    resources.push(resource);
    Ok(())
}

/// Read and parse manifests from files, in order
///
/// A path of `-` reads standard input.
pub fn load_manifests(paths: &[PathBuf]) -> Result<Vec<ImportResource>, ManifestError> {
    let mut resources = Vec::new();
    for path in paths {
        let text = read_source(path)?;
        resources.extend(parse_manifests(&text)?);
    }
    Ok(resources)
}

fn read_source(path: &Path) -> Result<String, ManifestError> {
    let read_error = |source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_error)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_documents() {
        let text = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: a
  namespace: dev
data:
  key: value
---
apiVersion: v1
kind: Pod
metadata:
  generateName: gen-
"#;
        let resources = parse_manifests(text).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].display_name(), "a");
        assert_eq!(resources[0].namespace(), Some("dev"));
        assert_eq!(resources[0].data["data"]["key"], "value");
        assert_eq!(resources[1].display_name(), "gen-...");
    }

    #[test]
    fn test_skips_empty_documents() {
        let text = "---\n---\napiVersion: v1\nkind: Namespace\nmetadata:\n  name: dev\n---\n";
        let resources = parse_manifests(text).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].kind, "Namespace");
    }

    #[test]
    fn test_flattens_lists() {
        let text = r#"
apiVersion: v1
kind: List
items:
  - apiVersion: v1
    kind: ConfigMap
    metadata:
      name: first
  - apiVersion: v1
    kind: ConfigMap
    metadata:
      name: second
"#;
        let names: Vec<String> = parse_manifests(text)
            .unwrap()
            .iter()
            .map(|r| r.display_name())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_missing_kind_is_reported_with_document_number() {
        let text = "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: a\n---\napiVersion: v1\nmetadata:\n  name: b\n";
        let err = parse_manifests(text).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::MissingField {
                document: 2,
                field: "kind"
            }
        ));
    }

    #[test]
    fn test_missing_api_version() {
        let err = parse_manifests("kind: Pod\nmetadata:\n  name: a\n").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::MissingField {
                document: 1,
                field: "apiVersion"
            }
        ));
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = parse_manifests("just a string\n").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject { document: 1 }));
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let resources = parse_manifests("apiVersion: v1\nkind: Pod\n").unwrap();
        assert_eq!(resources[0].display_name(), "");
        assert!(resources[0].metadata.name.is_none());
    }

    #[test]
    fn test_load_manifests_concatenates_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yaml");
        let second = dir.path().join("second.yaml");
        std::fs::write(&first, "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: one\n").unwrap();
        std::fs::write(&second, "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: two\n").unwrap();

        let resources = load_manifests(&[first, second]).unwrap();
        let names: Vec<String> = resources.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_load_manifests_missing_file() {
        let err = load_manifests(&[PathBuf::from("/nonexistent/kimport.yaml")]).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
