/// Admin credentials from environment variables
pub mod admin;

/// Database connection and table creation
pub mod database;

/// Fund seeds and storage settings from config.toml
pub mod portal;

pub use admin::AdminCredentials;
pub use portal::{PortalConfig, StorageConfig, load_config, load_default_config};
