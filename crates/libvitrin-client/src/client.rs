//! Content clients: one fetch interface, two sources.
//!
//! `HttpContentClient` talks to the content server with a cache-defeating
//! query parameter; `CachedContentClient` reads the local cache mirror.
//! Selecting between them is explicit configuration, never interception
//! of a shared primitive.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use libvitrin_core::{CacheStore, ContentFile, CACHE_NAMESPACE};

use crate::error::ClientError;
use crate::DEFAULT_TIMEOUT_MS;

/// One content fetch interface over the Content Store
pub trait ContentClient: Send + Sync {
    /// Fetch and parse one content file by relative path
    /// (e.g. `data.json`, `products/index.json`)
    fn fetch(&self, rel_path: &str) -> Result<Value, ClientError>;
}

impl<T: ContentClient + ?Sized> ContentClient for Box<T> {
    fn fetch(&self, rel_path: &str) -> Result<Value, ClientError> {
        (**self).fetch(rel_path)
    }
}

impl<T: ContentClient + ?Sized> ContentClient for Arc<T> {
    fn fetch(&self, rel_path: &str) -> Result<Value, ClientError> {
        (**self).fetch(rel_path)
    }
}

/// Network-backed client against the content server
pub struct HttpContentClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpContentClient {
    /// Build a client for a server base URL (e.g. `http://localhost:8082`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_MS)
    }

    /// Build a client with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL for a content file, with the cache-defeating timestamp query
    fn url_for(&self, rel_path: &str) -> String {
        format!(
            "{}/content/{}?t={}",
            self.base_url.trim_end_matches('/'),
            rel_path,
            Utc::now().timestamp_millis()
        )
    }
}

impl ContentClient for HttpContentClient {
    fn fetch(&self, rel_path: &str) -> Result<Value, ClientError> {
        let response = self.client.get(self.url_for(rel_path)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: rel_path.to_string(),
            });
        }
        Ok(response.json()?)
    }
}

/// Cache-backed client serving from the local mirror
pub struct CachedContentClient {
    cache: Arc<CacheStore>,
}

impl CachedContentClient {
    pub fn new(cache: Arc<CacheStore>) -> Self {
        Self { cache }
    }
}

impl ContentClient for CachedContentClient {
    fn fetch(&self, rel_path: &str) -> Result<Value, ClientError> {
        // Top-level files are mirrored under their namespaced key;
        // collection members are not mirrored individually.
        let key = match ContentFile::from_file_name(rel_path) {
            Some(file) => file.cache_key(),
            None => format!("{}{}", CACHE_NAMESPACE, rel_path),
        };
        self.cache
            .get(&key)
            .ok_or_else(|| ClientError::NotFound(rel_path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_url_carries_cache_bust() {
        let client = HttpContentClient::new("http://localhost:8082/");
        let url = client.url_for("data.json");
        assert!(url.starts_with("http://localhost:8082/content/data.json?t="));
    }

    #[test]
    fn test_cached_client_reads_namespaced_keys() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(CacheStore::open(&dir.path().join("cache")).unwrap());
        cache
            .put("cms_settings.json", &json!({"phone": "+62123456789"}))
            .unwrap();

        let client = CachedContentClient::new(cache);
        let settings = client.fetch("settings.json").unwrap();
        assert_eq!(settings["phone"], "+62123456789");
        assert!(client.fetch("about.json").unwrap_err().is_not_found());
    }
}
