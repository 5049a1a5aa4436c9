//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and resolves the context
//! and namespace that imports target.
//!
//! HTTP/HTTPS proxies are honoured through the standard `HTTP_PROXY`,
//! `HTTPS_PROXY` and `NO_PROXY` environment variables.

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Connection details for the cluster imports go to
pub struct ClusterConnection {
    pub client: Client,
    /// Current kubeconfig context ("in-cluster" when running in a pod)
    pub context: String,
    /// Namespace used for namespaced resources that don't name one
    pub default_namespace: String,
}

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. KUBECONFIG environment variable or ~/.kube/config
/// 2. In-cluster config (if running in a pod)
///
/// `context` selects a kubeconfig context other than the current one.
pub async fn connect(context: Option<&str>) -> Result<ClusterConnection> {
    let config = match context {
        Some(name) => {
            let options = KubeConfigOptions {
                context: Some(name.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .with_context(|| format!("Failed to load kubeconfig context '{}'", name))?
        }
        None => Config::infer()
            .await
            .context("Failed to infer Kubernetes configuration")?,
    };

    let default_namespace = config.default_namespace.clone();
    tracing::debug!("Connecting to {}", config.cluster_url);

    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    let context = context
        .map(String::from)
        .or_else(current_context)
        .unwrap_or_else(|| "in-cluster".to_string());

    Ok(ClusterConnection {
        client,
        context,
        default_namespace,
    })
}

/// Get the current context name from the kubeconfig, if there is one
pub fn current_context() -> Option<String> {
    Kubeconfig::read()
        .ok()
        .and_then(|kubeconfig| kubeconfig.current_context)
        .filter(|context| !context.is_empty())
}

/// Pick the namespace for resources without one
///
/// Precedence: CLI flag, then config, then the kube context's namespace.
pub fn resolve_namespace(flag: Option<&str>, configured: &str, context_namespace: &str) -> String {
    flag.filter(|ns| !ns.is_empty())
        .or_else(|| Some(configured).filter(|ns| !ns.is_empty()))
        .unwrap_or(context_namespace)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_namespace_precedence() {
        assert_eq!(resolve_namespace(Some("flag"), "config", "ctx"), "flag");
        assert_eq!(resolve_namespace(None, "config", "ctx"), "config");
        assert_eq!(resolve_namespace(None, "", "ctx"), "ctx");
        assert_eq!(resolve_namespace(Some(""), "", "default"), "default");
    }
}
