use anyhow::{Context, Result};
use folio_catalog::OrderingPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// JSON catalog to load. The built-in sample is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub ordering: OrderingPolicy,
    #[serde(default)]
    pub format: OutputFormat,
}

impl FolioConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("folio")
            .join("config.toml"))
    }

    /// Load config from disk, then apply `FOLIO_*` environment overrides.
    /// A missing file is not an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?, None)
    }

    /// `env` replaces the process environment when set, so tests don't have
    /// to touch global state.
    pub fn load_from(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize::<Self>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
