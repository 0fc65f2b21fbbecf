use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::VitalmapError;

/// Top-level configuration, loaded from `vitalmap.toml` when present.
/// Every field has a default so an empty (or absent) file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalmapConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub uploads: UploadConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection string for the portal's patient store
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory where uploaded CSV files are copied
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,

    /// Maximum accepted CSV payload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Train the demo classifier at startup
    #[serde(default = "default_classifier_enabled")]
    pub enabled: bool,

    /// Synthetic cohort size
    #[serde(default = "default_classifier_samples")]
    pub samples: usize,

    /// Maximum tree depth
    #[serde(default = "default_classifier_depth")]
    pub max_depth: usize,

    /// Cohort generation seed
    #[serde(default = "default_classifier_seed")]
    pub seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: default_classifier_enabled(),
            samples: default_classifier_samples(),
            max_depth: default_classifier_depth(),
            seed: default_classifier_seed(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_database_url() -> String {
    "sqlite://database/patients.db?mode=rwc".to_string()
}
fn default_upload_dir() -> PathBuf {
    PathBuf::from("static/uploads")
}
fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}
fn default_classifier_enabled() -> bool {
    true
}
fn default_classifier_samples() -> usize {
    1000
}
fn default_classifier_depth() -> usize {
    5
}
fn default_classifier_seed() -> u64 {
    42
}

impl VitalmapConfig {
    /// Load from an explicit path, or from `vitalmap.toml` in the working
    /// directory, falling back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self, VitalmapError> {
        let candidate = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("vitalmap.toml"));

        if !candidate.exists() {
            if path.is_some() {
                return Err(VitalmapError::config(format!(
                    "configuration file not found: {}",
                    candidate.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&candidate)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| VitalmapError::config(format!("{}: {}", candidate.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VitalmapError> {
        if self.classifier.samples == 0 {
            return Err(VitalmapError::config(
                "classifier.samples must be at least 1",
            ));
        }
        if self.classifier.max_depth == 0 {
            return Err(VitalmapError::config(
                "classifier.max_depth must be at least 1",
            ));
        }
        if self.uploads.max_bytes == 0 {
            return Err(VitalmapError::config("uploads.max_bytes must be positive"));
        }
        Ok(())
    }
}

/// Write a commented default `vitalmap.toml` into the working directory.
pub fn init_config_file(force: bool) -> Result<PathBuf, VitalmapError> {
    let config_path = PathBuf::from("vitalmap.toml");

    if config_path.exists() && !force {
        return Err(VitalmapError::config(
            "vitalmap.toml already exists. Use --force to overwrite.",
        ));
    }

    let default_config = r#"# Vitalmap configuration

[server]
host = "0.0.0.0"
port = 5000

[database]
url = "sqlite://database/patients.db?mode=rwc"

[uploads]
dir = "static/uploads"
max_bytes = 16777216

[classifier]
enabled = true
samples = 1000
max_depth = 5
seed = 42
"#;

    fs::write(&config_path, default_config)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: VitalmapConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.classifier.samples, 1000);
        assert_eq!(config.uploads.max_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: VitalmapConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [classifier]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.classifier.enabled);
        assert_eq!(config.classifier.max_depth, 5);
    }

    #[test]
    fn zero_samples_fails_validation() {
        let config: VitalmapConfig = toml::from_str(
            r#"
            [classifier]
            samples = 0
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn generated_default_config_round_trips() {
        let parsed: VitalmapConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5000

            [classifier]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(parsed.classifier.seed, 42);
    }
}
