//! Config command implementation.
//!
//! Shows, initializes, and locates the configuration file.

use anyhow::Result;
use schemagen_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

use crate::cli::ConfigAction;
use crate::config::{Config, LOCAL_CONFIG_FILE, LoadedConfig, save_config, user_config_path};
use crate::formatters::format_output;

/// Effective configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigReport<'a> {
    /// Source file, or `defaults`
    pub source: String,
    /// Effective configuration
    pub config: &'a Config,
}

/// Result of `config init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    /// Written file
    pub path: PathBuf,
    /// Whether an existing file was replaced
    pub overwritten: bool,
}

/// Target file of `config init`.
///
/// # Errors
///
/// Returns an error if the user config directory cannot be determined.
pub fn init_path(local: bool) -> Result<PathBuf> {
    if local {
        Ok(PathBuf::from(LOCAL_CONFIG_FILE))
    } else {
        user_config_path()
    }
}

/// Writes a default configuration to `path`.
///
/// Returns `None` if the file exists and `force` is not set.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(path: PathBuf, force: bool) -> Result<Option<InitReport>> {
    let overwritten = path.exists();
    if overwritten && !force {
        return Ok(None);
    }

    save_config(&Config::default(), &path)?;
    info!("Wrote default configuration to {}", path.display());

    Ok(Some(InitReport { path, overwritten }))
}

fn describe_source(loaded: &LoadedConfig) -> String {
    loaded
        .path
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |path| path.display().to_string())
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if a file cannot be written or output formatting fails.
pub fn run(action: ConfigAction, loaded: &LoadedConfig, output_format: OutputFormat) -> Result<ExitCode> {
    match action {
        ConfigAction::Show => {
            let report = ConfigReport {
                source: describe_source(loaded),
                config: &loaded.config,
            };
            println!("{}", format_output(&report, output_format)?);
        }
        ConfigAction::Init { local, force } => {
            let path = init_path(local)?;
            let Some(report) = init_config(path.clone(), force)? else {
                error!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                );
                return Ok(ExitCode::ERROR);
            };
            println!("{}", format_output(&report, output_format)?);
        }
        ConfigAction::Path => {
            println!("{}", format_output(&describe_source(loaded), output_format)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schemagen.toml");

        let report = init_config(path.clone(), false).unwrap().unwrap();
        assert!(!report.overwritten);

        let config = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schemagen.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert!(init_config(path.clone(), false).unwrap().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        let report = init_config(path, true).unwrap().unwrap();
        assert!(report.overwritten);
    }

    #[test]
    fn test_describe_source() {
        let defaults = LoadedConfig {
            config: Config::default(),
            path: None,
        };
        assert_eq!(describe_source(&defaults), "defaults");

        let from_file = LoadedConfig {
            config: Config::default(),
            path: Some(PathBuf::from("schemagen.toml")),
        };
        assert_eq!(describe_source(&from_file), "schemagen.toml");
    }

    #[test]
    fn test_show_succeeds() {
        let loaded = LoadedConfig {
            config: Config::default(),
            path: None,
        };
        let code = run(ConfigAction::Show, &loaded, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
