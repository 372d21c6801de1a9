//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `purifier.toml` in the working directory unless another path is
//! given on the command line. Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use purifier_domain::candidate::CandidatePolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry snapshot source.
    pub registry: RegistryConfig,
    /// Persisted card configuration.
    pub card: CardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Device picker allowlists.
    pub devices: CandidatePolicy,
}

/// Where the registry snapshot is read from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path of the JSON snapshot file.
    pub snapshot: PathBuf,
}

/// Where the card configuration lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Path of the JSON card configuration.
    pub config: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PURIFIER_SNAPSHOT") {
            self.registry.snapshot = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PURIFIER_CARD_CONFIG") {
            self.card.config = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PURIFIER_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.snapshot.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "registry snapshot path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            config: PathBuf::from("card.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "purifierctl=info,purifier_app=info,purifier_adapter_registry_json=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.registry.snapshot, PathBuf::from("snapshot.json"));
        assert_eq!(config.card.config, PathBuf::from("card.json"));
        assert_eq!(config.devices, CandidatePolicy::default());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.registry.snapshot, PathBuf::from("snapshot.json"));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [registry]
            snapshot = '/var/lib/host/snapshot.json'

            [card]
            config = 'living-room.json'

            [logging]
            filter = 'debug'

            [devices]
            manufacturers = ['philips', 'versuni']
            models = ['AC4236']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.registry.snapshot,
            PathBuf::from("/var/lib/host/snapshot.json")
        );
        assert_eq!(config.card.config, PathBuf::from("living-room.json"));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.manufacturers, vec!["philips", "versuni"]);
        assert_eq!(config.devices.models, vec!["AC4236"]);
    }

    #[test]
    fn should_keep_default_models_when_only_manufacturers_given() {
        let toml = "
            [devices]
            manufacturers = ['versuni']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.devices.models, CandidatePolicy::default().models);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.card.config, PathBuf::from("card.json"));
    }

    #[test]
    fn should_reject_empty_snapshot_path() {
        let mut config = Config::default();
        config.registry.snapshot = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
