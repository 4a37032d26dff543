pub mod classify;
pub mod process;
pub mod statuses;

use anyhow::Context;
use legis_core::config::{Config, WarnLevel};
use legis_core::Processor;
use std::path::PathBuf;
use tracing::{error, warn};

/// Global flags shared by every command.
pub struct Settings {
    pub config: Option<PathBuf>,
    pub registry: Option<PathBuf>,
}

impl Settings {
    /// Load the config file (if any) and apply command-line overrides.
    /// A registry path in the config file is relative to that file.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut cfg = Config::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                if let (Some(registry), Some(dir)) = (&cfg.registry, path.parent()) {
                    if registry.is_relative() {
                        cfg.registry = Some(dir.join(registry));
                    }
                }
                cfg
            }
            None => Config::default(),
        };
        if let Some(registry) = &self.registry {
            config.registry = Some(registry.clone());
        }

        for warning in config.validate() {
            match warning.level {
                WarnLevel::Error => error!("config: {}", warning.message),
                WarnLevel::Warning => warn!("config: {}", warning.message),
            }
        }
        Ok(config)
    }

    pub fn processor(&self, config: &Config) -> anyhow::Result<Processor> {
        Processor::from_config(config).with_context(|| match &config.registry {
            Some(path) => format!("failed to load committee registry {}", path.display()),
            None => "failed to build processor".to_string(),
        })
    }
}
