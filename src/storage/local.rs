//! Local directory object store.

use super::ObjectStore;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

/// Writes each object to `<root>/<key>`.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<()> {
        let path = self.root.join(key);
        write_new(&self.root, &path, &bytes)
            .await
            .map_err(|e| Error::Remote {
                message: format!("failed to store {}: {e}", path.display()),
            })?;
        debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }

    /// Filesystem path of the object. Not reachable from Discord; the gallery
    /// shows only the key for these.
    fn public_url(&self, key: &str) -> String {
        self.root.join(key).display().to_string()
    }
}

// create_new: an existing key is an error, matching the remote bucket
async fn write_new(root: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::create_dir_all(root).await?;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}
