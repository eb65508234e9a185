//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ADHOC_<SECTION>__<KEY>`, e.g.
//!    `ADHOC_OUTPUT__PUBLISH_FORMAT=text`
//! 3. Config file (`--config`, or [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use adhoc_core::{domain::Ecosystem, error::AdhocResult};

use crate::cli::PublishFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The build's attribute schema.
    pub schema: SchemaConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Ecosystems of every component that does not register its own.
    pub ecosystems: Vec<EcosystemConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used by `adhoc publish` when `--format` is not given.
    pub publish_format: PublishFormat,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            ecosystems: vec![EcosystemConfig {
                name: "rust".into(),
                description: None,
            }],
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("ADHOC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to load configuration from '{}'", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.adhoc.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "adhoc", "adhoc")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".adhoc.toml"))
    }

    /// The schema's default ecosystems, validated.
    pub fn default_ecosystems(&self) -> AdhocResult<Vec<Ecosystem>> {
        let ecosystems = self
            .schema
            .ecosystems
            .iter()
            .map(|e| Ecosystem::new(e.name.as_str(), e.description.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ecosystems)
    }
}
