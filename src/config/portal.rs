//! Portal configuration loading from config.toml
//!
//! `config.toml` holds the initial fund balances used to seed the
//! `financial_data` table and the object-storage settings. Every section is
//! optional; a missing file yields the defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct PortalConfig {
    /// Seed values for the two fund rows
    #[serde(default)]
    pub funds: FundSeeds,
    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Seed values for both funds
#[derive(Debug, Default, Deserialize)]
pub struct FundSeeds {
    #[serde(default)]
    pub ganesh_chanda: GaneshChandaSeed,
    #[serde(default)]
    pub marriage_gold: MarriageGoldSeed,
}

/// Initial Ganesh Chanda values
#[derive(Debug, Default, Deserialize, Clone)]
pub struct GaneshChandaSeed {
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub contributors: i32,
    #[serde(default)]
    pub total_members: i32,
}

/// Initial Marriage Gold values
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MarriageGoldSeed {
    #[serde(default)]
    pub total_fund: f64,
    #[serde(default)]
    pub recent_support: f64,
    pub last_recipient: Option<String>,
}

/// Object storage settings. The remote URL and key come from the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Bucket that holds uploaded media
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Directory used by the local store when no remote storage is configured
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            directory: default_directory(),
        }
    }
}

fn default_bucket() -> String {
    "media".to_string()
}

fn default_directory() -> String {
    "data/media".to_string()
}

/// Loads portal configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PortalConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from `./config.toml`, falling back to defaults when the
/// file does not exist. A file that exists but does not parse is still an error.
pub fn load_default_config() -> Result<PortalConfig> {
    let path = Path::new("config.toml");
    if !path.exists() {
        info!("No config.toml found, using default portal configuration.");
        return Ok(PortalConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_portal_config() {
        let toml_str = r#"
            [funds.ganesh_chanda]
            current_amount = 25500.0
            target_amount = 50000.0
            contributors = 18
            total_members = 25

            [funds.marriage_gold]
            total_fund = 125000.0
            recent_support = 15000.0
            last_recipient = "Rahul Patel"

            [storage]
            bucket = "gallery"
        "#;

        let config: PortalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.funds.ganesh_chanda.current_amount, 25500.0);
        assert_eq!(config.funds.ganesh_chanda.contributors, 18);
        assert_eq!(config.funds.marriage_gold.total_fund, 125_000.0);
        assert_eq!(
            config.funds.marriage_gold.last_recipient.as_deref(),
            Some("Rahul Patel")
        );
        assert_eq!(config.storage.bucket, "gallery");
        // Unspecified keys fall back to defaults
        assert_eq!(config.storage.directory, "data/media");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config.funds.ganesh_chanda.target_amount, 0.0);
        assert!(config.funds.marriage_gold.last_recipient.is_none());
        assert_eq!(config.storage.bucket, "media");
    }

    #[test]
    fn test_load_config_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[funds\n").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
