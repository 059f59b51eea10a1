//! Site configuration loaded from `vitrin.toml`.
//!
//! Every field has a default; a missing config file yields the default
//! configuration rather than an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::VitrinError;
use crate::{DEFAULT_PUBLISH_SETTLE_MS, DEFAULT_SYNC_INTERVAL_SECS, PLACEHOLDER_IMAGE};

/// Configuration for the server, CLI, and sync loop
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding index.html and the content tree
    pub site_root: PathBuf,
    /// Content directory, relative to the site root when not absolute
    pub content_dir: PathBuf,
    /// Local cache database path, relative to the site root when not absolute
    pub cache_path: PathBuf,
    /// HTTP bind port
    pub port: u16,
    /// Periodic re-sync interval in seconds
    pub sync_interval_secs: u64,
    /// Settling delay after a publish notification, in milliseconds
    pub publish_settle_ms: u64,
    /// Placeholder substituted for images that fail to load
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_root: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            cache_path: PathBuf::from(".vitrin/cache"),
            port: 8082,
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            publish_settle_ms: DEFAULT_PUBLISH_SETTLE_MS,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file; a missing file is the default config
    pub fn load(path: &Path) -> Result<Self, VitrinError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SiteConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Absolute content directory
    pub fn content_root(&self) -> PathBuf {
        if self.content_dir.is_absolute() {
            self.content_dir.clone()
        } else {
            self.site_root.join(&self.content_dir)
        }
    }

    /// Absolute cache database path
    pub fn cache_db(&self) -> PathBuf {
        if self.cache_path.is_absolute() {
            self.cache_path.clone()
        } else {
            self.site_root.join(&self.cache_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = SiteConfig::load(Path::new("/nonexistent/vitrin.toml")).unwrap();
        assert_eq!(config.port, 8082);
        assert_eq!(config.sync_interval_secs, DEFAULT_SYNC_INTERVAL_SECS);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitrin.toml");
        std::fs::write(&path, "port = 9000\nsync_interval_secs = 5\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.sync_interval_secs, 5);
        assert_eq!(config.publish_settle_ms, DEFAULT_PUBLISH_SETTLE_MS);
    }

    #[test]
    fn test_relative_paths_resolve_under_site_root() {
        let config = SiteConfig {
            site_root: PathBuf::from("/srv/site"),
            ..SiteConfig::default()
        };
        assert_eq!(config.content_root(), PathBuf::from("/srv/site/content"));
        assert_eq!(config.cache_db(), PathBuf::from("/srv/site/.vitrin/cache"));
    }
}
