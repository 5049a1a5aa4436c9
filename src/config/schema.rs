//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace for namespaced resources that don't name one
    /// (empty = the kube context's namespace)
    #[serde(default)]
    pub default_namespace: String,

    /// Validate on the server without persisting anything
    #[serde(default = "default_false")]
    pub dry_run: bool,

    /// Field manager recorded on created objects
    #[serde(default = "default_field_manager")]
    pub field_manager: String,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse support
    #[serde(default = "default_false")]
    pub enable_mouse: bool,

    /// Disable Unicode icons for compatibility
    #[serde(default = "default_false")]
    pub no_icons: bool,

    /// Event poll interval; also drives the spinner
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

// Default value functions
fn default_false() -> bool {
    false
}

fn default_field_manager() -> String {
    "kimport".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: String::new(),
            dry_run: default_false(),
            field_manager: default_field_manager(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_false(),
            no_icons: default_false(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(!config.dry_run);
        assert_eq!(config.default_namespace, "");
        assert_eq!(config.field_manager, "kimport");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("dryRun"));
        assert!(yaml.contains("fieldManager"));
        assert!(yaml.contains("tickRateMs"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
dryRun: true
defaultNamespace: my-ns
ui:
  noIcons: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.dry_run);
        assert_eq!(config.default_namespace, "my-ns");
        assert!(config.ui.no_icons);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.field_manager, "kimport");
    }
}
