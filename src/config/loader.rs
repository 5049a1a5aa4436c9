//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Context-specific config
    /// 3. Root config
    /// 4. Built-in defaults
    ///
    /// Layers are merged key by key, so a context file only needs the keys it
    /// changes.
    pub fn load(context: Option<&str>) -> Result<Config> {
        let mut merged = serde_yaml::to_value(Self::load_defaults())
            .context("Failed to serialize default configuration")?;

        let mut layers = vec![paths::root_config_path()];
        if let Some(context_name) = context {
            layers.push(paths::context_config_path(context_name));
        }

        for path in layers {
            if !path.exists() {
                continue;
            }
            let layer = Self::load_value(&path)?;
            tracing::debug!("Merging configuration layer {}", path.display());
            Self::merge_values(&mut merged, layer);
        }

        let config: Config =
            serde_yaml::from_value(merged).context("Failed to build merged configuration")?;

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a single file
    pub fn load_file(path: &Path) -> Result<Config> {
        let value = Self::load_value(path)?;
        let config: Config = serde_yaml::from_value(value)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    fn load_value(path: &Path) -> Result<serde_yaml::Value> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let value: serde_yaml::Value = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // An empty file is an empty layer
        if value.is_null() {
            return Ok(serde_yaml::Value::Mapping(Default::default()));
        }
        Ok(value)
    }

    /// Validate configuration by loading every layer and checking for errors
    pub fn validate(context: Option<&str>) -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            let config = Self::load_file(&root_path)?;
            if config.ui.tick_rate_ms == 0 {
                return Err(anyhow::anyhow!("ui.tickRateMs must be greater than 0"));
            }
        }

        let config = Self::load(context).context("Failed to load merged configuration")?;
        if config.field_manager.len() > 128 {
            return Err(anyhow::anyhow!(
                "fieldManager must be at most 128 characters, got {}",
                config.field_manager.len()
            ));
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Merge `overlay` into `base`, recursing into mappings
    fn merge_values(base: &mut serde_yaml::Value, overlay: serde_yaml::Value) {
        match (base, overlay) {
            (serde_yaml::Value::Mapping(base_map), serde_yaml::Value::Mapping(overlay_map)) => {
                for (key, value) in overlay_map {
                    match base_map.get_mut(&key) {
                        Some(existing) => Self::merge_values(existing, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
            (base, overlay) => *base = overlay,
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(namespace) = std::env::var("KIMPORT_DEFAULT_NAMESPACE") {
            config.default_namespace = namespace;
        }

        if let Ok(dry_run) = std::env::var("KIMPORT_DRY_RUN") {
            if let Ok(val) = dry_run.parse::<bool>() {
                config.dry_run = val;
            }
        }

        if let Ok(field_manager) = std::env::var("KIMPORT_FIELD_MANAGER") {
            config.field_manager = field_manager;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }

    /// Save context-specific configuration
    pub fn save_context(config: &Config, context: &str) -> Result<()> {
        Self::save(config, &paths::context_config_path(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(!config.dry_run);
        assert_eq!(config.field_manager, "kimport");
    }

    #[test]
    fn test_merge_values_keeps_unset_keys() {
        let mut base = serde_yaml::to_value(Config::default()).unwrap();
        let overlay: serde_yaml::Value =
            serde_yaml::from_str("ui:\n  noIcons: true\ndefaultNamespace: team-a\n").unwrap();

        ConfigLoader::merge_values(&mut base, overlay);
        let merged: Config = serde_yaml::from_value(base).unwrap();

        assert!(merged.ui.no_icons);
        assert_eq!(merged.ui.tick_rate_ms, 100);
        assert_eq!(merged.default_namespace, "team-a");
        assert_eq!(merged.field_manager, "kimport");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            dry_run: true,
            default_namespace: "dev".to_string(),
            ..Default::default()
        };

        ConfigLoader::save(&config, &path).unwrap();
        let loaded = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_file_is_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "").unwrap();

        let loaded = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_env_overrides() {
        // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
        // No other test reads these variables.
        unsafe {
            std::env::set_var("KIMPORT_DRY_RUN", "true");
            std::env::set_var("KIMPORT_FIELD_MANAGER", "ci-import");
        }

        let config = ConfigLoader::apply_env_overrides(Config::default());

        assert!(config.dry_run);
        assert_eq!(config.field_manager, "ci-import");

        // SAFETY: same as above
        unsafe {
            std::env::remove_var("KIMPORT_DRY_RUN");
            std::env::remove_var("KIMPORT_FIELD_MANAGER");
        }
    }
}
