//! CLI configuration.
//!
//! Configuration is stored in TOML. Lookup order:
//! 1. `--config PATH` (or `SCHEMAGEN_CONFIG`)
//! 2. `./schemagen.toml`
//! 3. the user config file:
//!    - Linux: `~/.config/schemagen/config.toml`
//!    - macOS: `~/Library/Application Support/schemagen/config.toml`
//!    - Windows: `%APPDATA%\schemagen\config.toml`
//! 4. built-in defaults
//!
//! Command-line arguments override configured values.

use anyhow::{Context, Result};
use schemagen_core::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "schemagen.toml";

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "info"
///
/// [sync]
/// source_dir = "src/components"
/// output_dir = "schemas"
/// extensions = ["tsx"]
/// exclude = ["component-renderer", "index"]
/// recursive = false
/// parallel = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Sync pipeline settings
    #[serde(default)]
    pub sync: SyncConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Sync pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyncConfig {
    /// Component source directory
    pub source_dir: PathBuf,

    /// Schema output directory
    pub output_dir: PathBuf,

    /// Source file extensions, without the dot
    pub extensions: Vec<String>,

    /// File-stem substrings that are never components
    pub exclude: Vec<String>,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Process files on a worker pool
    pub parallel: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default().as_str().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/components"),
            output_dir: PathBuf::from("schemas"),
            extensions: vec![schemagen_introspector::scanner::DEFAULT_EXTENSION.to_string()],
            exclude: schemagen_introspector::extractor::DEFAULT_EXCLUSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            recursive: false,
            parallel: true,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.general
            .default_format
            .parse::<OutputFormat>()
            .map_err(|_| {
                anyhow::anyhow!(
                    "invalid default_format '{}', must be one of: json, text, pretty",
                    self.general.default_format
                )
            })?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            anyhow::bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                valid_levels.join(", ")
            );
        }

        if self.sync.source_dir.as_os_str().is_empty() {
            anyhow::bail!("sync.source_dir cannot be empty");
        }

        if self.sync.output_dir.as_os_str().is_empty() {
            anyhow::bail!("sync.output_dir cannot be empty");
        }

        if self.sync.extensions.is_empty() {
            anyhow::bail!("sync.extensions must list at least one extension");
        }

        if let Some(ext) = self
            .sync
            .extensions
            .iter()
            .find(|ext| ext.trim_start_matches('.').is_empty())
        {
            anyhow::bail!("invalid extension '{ext}' in sync.extensions");
        }

        if self.sync.exclude.iter().any(String::is_empty) {
            anyhow::bail!("sync.exclude cannot contain empty patterns");
        }

        Ok(())
    }

    /// Returns the default output format.
    ///
    /// # Errors
    ///
    /// Returns an error if `general.default_format` is invalid.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.general
            .default_format
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Configuration together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// Effective configuration
    pub config: Config,
    /// File the configuration was read from; `None` for defaults
    pub path: Option<PathBuf>,
}

/// Gets the user configuration file path.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn user_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;

    Ok(config_dir.join("schemagen").join("config.toml"))
}

/// Finds the config file to use, without reading it.
///
/// An explicit path is returned as-is; otherwise the first existing file in
/// lookup order, or `None`.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    user_config_path().ok().filter(|path| path.is_file())
}

/// Loads configuration following the lookup order.
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or if the selected file
/// cannot be read, parsed, or validated.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let Some(path) = resolve_config_path(explicit) else {
        debug!("Config file not found, using defaults");
        return Ok(LoadedConfig {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = Config::from_toml(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    debug!("Loaded config from {}", path.display());

    Ok(LoadedConfig {
        config,
        path: Some(path),
    })
}

/// Saves configuration to a file, creating parent directories.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the file cannot be
/// written.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    fs::write(path, config.to_toml()?).context("failed to write config file")?;

    debug!("Saved config to {}", path.display());

    Ok(())
}
