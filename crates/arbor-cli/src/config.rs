//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use arbor::{ArborError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for ArborError {
    fn from(err: ConfigError) -> Self {
        ArborError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (arbor/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - A configured color is not a valid CSS color
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArborError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("arbor/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "arbor", "arbor") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ArborError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    debug!(engine:? = config.layout().engine(); "Configuration loaded");
    Ok(config)
}

/// Reject colors that would only fail later, at render time.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let style = config.style();
    style.background_color().map_err(ConfigError::Validation)?;
    style.line_color().map_err(ConfigError::Validation)?;
    style.arc_color().map_err(ConfigError::Validation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arbor::LayoutEngine;
    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = config_file(
            r##"
[layout]
engine = "contour"

[style]
background_color = "white"
arc_color = "#336699"
"##,
        );

        let config = load_config(Some(file.path())).expect("Failed to load config");
        assert_eq!(config.layout().engine(), LayoutEngine::Contour);
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = config_file("");

        let config = load_config(Some(file.path())).expect("Failed to load config");
        assert_eq!(config.layout().engine(), LayoutEngine::Basic);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/nonexistent/arbor/config.toml")).unwrap_err();
        assert!(matches!(err, ArborError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_unknown_engine_is_parse_error() {
        let file = config_file("[layout]\nengine = \"sugiyama\"\n");

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ArborError::Config(msg) if msg.contains("Failed to parse")));
    }

    #[test]
    fn test_invalid_color_is_validation_error() {
        let file = config_file("[style]\nline_color = \"not-a-color\"\n");

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ArborError::Config(msg) if msg.contains("Validation error")));
    }
}
