//! Widget settings
//!
//! Layered with the `config` crate: optional TOML file first, then
//! `SITETIME__*` environment variables (e.g. `SITETIME__DEFAULT_SITE=3`).

use crate::error::SettingsError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use sitetime_core::domain::WidgetConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "SITETIME";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// One configured site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteEntry {
    pub id: u32,
    pub timezone: String,
}

/// Optional overrides of the widget registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetOverrides {
    pub subcategory: Option<String>,
    pub order: Option<i32>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Current user's default site
    pub default_site: Option<u32>,
    pub sites: Vec<SiteEntry>,
    /// JSON message catalog laid over the built-in English one
    pub catalog: Option<PathBuf>,
    pub widget: WidgetOverrides,
}

impl WidgetSettings {
    /// Load from an optional file plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::layered(path, Some(environment()))
    }

    /// Load a settings file without the environment layer
    pub fn load_file(path: &Path) -> Result<Self, SettingsError> {
        Self::layered(Some(path), None)
    }

    fn layered(path: Option<&Path>, env: Option<Environment>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading settings file");
            builder = builder.add_source(File::from(path).required(true));
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }
        Self::build(builder)
    }

    /// Parse TOML text only (no environment)
    pub fn from_toml(toml: &str) -> Result<Self, SettingsError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        debug!(sites = settings.sites.len(), "Settings loaded");
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let mut seen = HashSet::new();
        for site in &self.sites {
            if site.id == 0 {
                return Err(SettingsError::Invalid("site id must be positive".to_string()));
            }
            if !seen.insert(site.id) {
                return Err(SettingsError::Invalid(format!(
                    "duplicate site id: {}",
                    site.id
                )));
            }
        }
        if self.default_site == Some(0) {
            return Err(SettingsError::Invalid(
                "default_site must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Registration metadata with overrides applied
    pub fn widget_config(&self) -> WidgetConfig {
        let mut config = WidgetConfig::default();
        if let Some(subcategory) = &self.widget.subcategory {
            config = config.with_subcategory(Some(subcategory.clone()).filter(|s| !s.is_empty()));
        }
        if let Some(order) = self.widget.order {
            config = config.with_order(order);
        }
        if let Some(enabled) = self.widget.enabled {
            config = config.with_enabled(enabled);
        }
        config
    }
}
