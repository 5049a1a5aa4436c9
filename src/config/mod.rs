//! Configuration system for kimport
//!
//! Layered YAML configuration (defaults, root file, per-context file,
//! environment) with dotted-key access for the `config` subcommand.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, UiConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "defaultNamespace" => Ok(config.default_namespace.clone()),
        "dryRun" => Ok(config.dry_run.to_string()),
        "fieldManager" => Ok(config.field_manager.clone()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.noIcons" => Ok(config.ui.no_icons.to_string()),
        "ui.tickRateMs" => Ok(config.ui.tick_rate_ms.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "defaultNamespace" => {
            config.default_namespace = value.to_string();
        }
        "dryRun" => {
            config.dry_run = value.parse().context("dryRun must be 'true' or 'false'")?;
        }
        "fieldManager" => {
            config.field_manager = value.to_string();
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.noIcons" => {
            config.ui.no_icons = value
                .parse()
                .context("ui.noIcons must be 'true' or 'false'")?;
        }
        "ui.tickRateMs" => {
            let tick: u64 = value.parse().context("ui.tickRateMs must be a number")?;
            if tick == 0 {
                return Err(anyhow::anyhow!("ui.tickRateMs must be greater than 0"));
            }
            config.ui.tick_rate_ms = tick;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
