//! Storage REST client.
//!
//! Speaks the object API of the hosted backend:
//! `POST {base}/storage/v1/object/{bucket}/{key}` to upload and
//! `{base}/storage/v1/object/public/{bucket}/{key}` to read.

use super::ObjectStore;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, instrument};

/// Object store backed by the hosted storage service.
pub struct HttpObjectStore {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl HttpObjectStore {
    /// Creates a client for `bucket` at `base_url`, authenticating with `api_key`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, bucket: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        let response = self
            .client
            .post(self.object_url(key))
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote {
                message: format!("storage upload failed with {status}: {body}"),
            });
        }

        debug!("Stored object {} in bucket {}", key, self.bucket);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serves one request with `status_line` and `body`, then closes.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            // Drain headers and body so the client sees the response, not a reset
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_rejected_upload_is_remote_error_with_status() {
        let base = serve_once(
            "HTTP/1.1 403 Forbidden",
            r#"{"error":"new row violates row-level security policy"}"#,
        )
        .await;
        let store = HttpObjectStore::new(base, "anon-key", "media");

        let result = store.put("1700000000000.png", vec![1, 2, 3], "image/png").await;

        match result {
            Err(Error::Remote { message }) => {
                assert!(message.contains("403"), "unexpected message: {message}");
                assert!(message.contains("row-level security"));
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accepted_upload_is_ok() -> Result<()> {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"Key":"media/1700000000000.png"}"#).await;
        let store = HttpObjectStore::new(base, "service-key", "media");

        store.put("1700000000000.png", vec![1, 2, 3], "image/png").await
    }

    #[tokio::test]
    async fn test_unreachable_storage_is_remote_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let store = HttpObjectStore::new(format!("http://{addr}"), "anon-key", "media");

        let result = store.put("1700000000000.mp4", vec![0], "video/mp4").await;

        assert!(matches!(result, Err(Error::Remote { .. })));
    }

    #[test]
    fn test_urls_are_built_from_base_and_bucket() {
        let store = HttpObjectStore::new("https://portal.example.co/", "key", "media");
        assert_eq!(
            store.object_url("1700000000000.png"),
            "https://portal.example.co/storage/v1/object/media/1700000000000.png"
        );
        assert_eq!(
            store.public_url("1700000000000.png"),
            "https://portal.example.co/storage/v1/object/public/media/1700000000000.png"
        );
    }
}
