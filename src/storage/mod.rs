//! Object storage for uploaded media.
//!
//! The gallery bytes live in a bucket outside the relational store. The
//! [`ObjectStore`] trait hides which bucket implementation is in use so the
//! data-access layer can write blobs without knowing whether they end up in the
//! hosted storage service or a local directory.

/// HTTP client for the hosted storage service
pub mod http;
/// Directory-backed store for local runs
pub mod local;

pub use http::HttpObjectStore;
pub use local::LocalObjectStore;

use crate::{config::StorageConfig, errors::Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A bucket that accepts raw bytes under a caller-chosen key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `key`. Fails if the key already exists.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Link a viewer can open to fetch the object.
    fn public_url(&self, key: &str) -> String;
}

/// Picks the store for this process.
///
/// `STORAGE_URL` together with `STORAGE_KEY` selects the hosted service; otherwise
/// blobs go to the configured local directory.
#[must_use]
pub fn from_env(config: &StorageConfig) -> Arc<dyn ObjectStore> {
    let var = |name| std::env::var(name).ok().filter(|v: &String| !v.is_empty());
    match (var("STORAGE_URL"), var("STORAGE_KEY")) {
        (Some(url), Some(key)) => {
            info!("Using remote object storage at {} (bucket '{}')", url, config.bucket);
            Arc::new(HttpObjectStore::new(url, key, config.bucket.clone()))
        }
        _ => {
            info!("Using local object storage in {}", config.directory);
            Arc::new(LocalObjectStore::new(&config.directory))
        }
    }
}
