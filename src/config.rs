//! TOML configuration
//!
//! ```toml
//! [validation]
//! enforce_domains = true
//! reject_non_finite = false
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```
//!
//! Every table and key is optional; missing values take their defaults.

use crate::error::{FormulaError, Result};
use crate::logging::LogConfig;
use crate::validation::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Crate-wide settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExphysConfig {
    /// Behaviour of [`crate::Catalogue::evaluate_checked`]
    pub validation: ValidationConfig,

    /// Subscriber settings for [`crate::init_logging`]
    pub logging: LogConfig,
}

/// Reads and writes [`ExphysConfig`] as TOML
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ExphysConfig> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FormulaError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = Self::load_from_string(&content)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn load_from_string(content: &str) -> Result<ExphysConfig> {
        toml::from_str(content)
            .map_err(|e| FormulaError::Configuration(format!("Invalid TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn export_to_string(config: &ExphysConfig) -> Result<String> {
        toml::to_string_pretty(config).map_err(|e| {
            FormulaError::Configuration(format!("Failed to serialize configuration: {}", e))
        })
    }

    /// Write configuration to a TOML file, creating parent directories
    pub fn export_to_file<P: AsRef<Path>>(config: &ExphysConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::export_to_string(config)?)?;
        Ok(())
    }

    /// `<config dir>/exphys/config.toml`, or `./exphys.toml` when the platform has
    /// no config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("exphys").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("exphys.toml"))
    }

    /// Load from [`ConfigLoader::default_path`], falling back to defaults
    pub fn load_or_default() -> ExphysConfig {
        let path = Self::default_path();
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(FormulaError::ConfigNotFound { .. }) => ExphysConfig::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable configuration");
                ExphysConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, LogLevel};
    use tempfile::tempdir;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_from_string("").unwrap();
        assert_eq!(config, ExphysConfig::default());
        assert!(config.validation.enforce_domains);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_str = r#"
[validation]
reject_non_finite = false

[logging]
level = "debug"
format = "json"
"#;
        let config = ConfigLoader::load_from_string(toml_str).unwrap();
        assert!(config.validation.enforce_domains);
        assert!(!config.validation.reject_non_finite);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_from_string("[validation\nenforce_domains = ");
        assert!(matches!(result, Err(FormulaError::Configuration(_))));

        let result = ConfigLoader::load_from_string("[logging]\nlevel = \"loud\"");
        assert!(matches!(result, Err(FormulaError::Configuration(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = ExphysConfig::default();
        config.validation = ValidationConfig::permissive();
        config.logging.level = LogLevel::Trace;

        ConfigLoader::export_to_file(&config, &path).unwrap();
        let loaded = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = ConfigLoader::load_from_file(temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(FormulaError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_default_path() {
        let path = ConfigLoader::default_path();
        assert!(path.ends_with("config.toml") || path.ends_with("exphys.toml"));
    }
}
