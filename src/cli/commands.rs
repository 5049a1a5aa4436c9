//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{ConfigLoader, paths};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "dryRun", "ui.noIcons")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "dryRun", "ui.noIcons")
        key: String,
        /// Configuration value
        value: String,
        /// Context name for context-specific config
        #[arg(long)]
        context: Option<String>,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    let current_context = crate::kube::current_context();

    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load(current_context.as_deref())
                .context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set {
            key,
            value,
            context,
        } => {
            // Start from the file being written so other layers don't leak into it
            let path = match context.as_deref() {
                Some(name) => paths::context_config_path(name),
                None => paths::root_config_path(),
            };
            let mut config = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigLoader::load_defaults()
            };

            crate::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            if let Some(context_name) = context {
                ConfigLoader::save_context(&config, &context_name)
                    .context("Failed to save context configuration")?;
                println!("Configuration saved for context: {}", context_name);
            } else {
                ConfigLoader::save_root(&config).context("Failed to save configuration")?;
                println!("Configuration saved");
            }
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load(current_context.as_deref())
                .context("Failed to load configuration")?;

            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
            if let Some(context) = current_context {
                println!("{}", paths::context_config_path(&context).display());
            }
        }
        ConfigSubcommand::Validate => {
            ConfigLoader::validate(current_context.as_deref())
                .context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}
