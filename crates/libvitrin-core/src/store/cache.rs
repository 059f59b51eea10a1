//! Local cache: a sled-backed key-value mirror of the content files.
//!
//! Each logical content file is held whole under one namespaced key.
//! Writes are whole-value overwrites; merging happens in memory before
//! the write, never at the storage layer.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use fs2::FileExt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::defaults::{default_about, default_index_page, default_settings};
use crate::error::VitrinError;
use crate::types::content::SiteContent;
use crate::types::files::{is_namespaced_key, ContentFile};

/// A CacheStore with a filesystem-level exclusive lock.
///
/// The lock is held for the lifetime of this struct and automatically
/// released when dropped. This prevents a CLI process and a server from
/// opening the same sled database concurrently.
pub struct LockedCache {
    /// Lock file handle - flock released on drop
    _lock_file: File,
    /// The underlying cache
    cache: Arc<CacheStore>,
}

impl std::fmt::Debug for LockedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedCache")
            .field("cache", &"CacheStore { ... }")
            .finish()
    }
}

impl LockedCache {
    /// Get a reference to the inner CacheStore
    pub fn inner(&self) -> &CacheStore {
        &self.cache
    }

    /// Get a shared handle to the inner CacheStore. The lock outlives the
    /// handle only as long as this struct is kept alive.
    pub fn shared(&self) -> Arc<CacheStore> {
        Arc::clone(&self.cache)
    }
}

impl std::ops::Deref for LockedCache {
    type Target = CacheStore;

    fn deref(&self) -> &Self::Target {
        &self.cache
    }
}

/// Browser-origin-style key-value mirror of the content files
pub struct CacheStore {
    db: sled::Db,
    entries: sled::Tree,
}

impl CacheStore {
    /// Open or create a cache at the given path
    pub fn open(path: &Path) -> Result<Self, VitrinError> {
        let db = sled::open(path)?;
        let entries = db.open_tree("entries")?;
        Ok(Self { db, entries })
    }

    /// Open the cache with an exclusive filesystem lock (non-blocking).
    ///
    /// Lock file is created at `<path>.lock`. Returns `VitrinError::CacheBusy`
    /// if another process holds the lock.
    pub fn open_locked(path: &Path) -> Result<LockedCache, VitrinError> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let lock_file = File::create(&lock_path)?;
        lock_file
            .try_lock_exclusive()
            .map_err(|e| VitrinError::cache_locked(Some(&e.to_string())))?;

        let cache = Arc::new(Self::open(path)?);
        Ok(LockedCache {
            _lock_file: lock_file,
            cache,
        })
    }

    /// Get the cached snapshot for a key.
    ///
    /// Missing keys and unparseable snapshots both come back as `None`;
    /// a parse failure is logged and the stale bytes are left for the
    /// next overwrite.
    pub fn get(&self, key: &str) -> Option<Value> {
        let bytes = match self.entries.get(key.as_bytes()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding unparseable cache snapshot");
                None
            }
        }
    }

    /// Store a full snapshot under a key (whole-value overwrite)
    pub fn put(&self, key: &str, value: &Value) -> Result<(), VitrinError> {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.as_bytes(), bytes)?;
        self.entries.flush()?;
        Ok(())
    }

    /// Remove one key
    pub fn remove(&self, key: &str) -> Result<(), VitrinError> {
        self.entries.remove(key.as_bytes())?;
        self.entries.flush()?;
        Ok(())
    }

    /// All namespaced keys currently present
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .keys()
            .filter_map(|k| k.ok())
            .filter_map(|k| String::from_utf8(k.to_vec()).ok())
            .filter(|k| is_namespaced_key(k))
            .collect()
    }

    /// Seed any missing content key with the built-in defaults (first-load
    /// initialization)
    pub fn seed_if_empty(&self) -> Result<(), VitrinError> {
        for file in ContentFile::ALL {
            let key = file.cache_key();
            if self.get(&key).is_none() {
                self.put(&key, &default_snapshot(file)?)?;
                debug!(key, "seeded cache key with defaults");
            }
        }
        Ok(())
    }

    /// Delete every namespaced key and immediately re-seed defaults
    pub fn clear_all(&self) -> Result<(), VitrinError> {
        for key in self.keys() {
            self.entries.remove(key.as_bytes())?;
        }
        self.entries.flush()?;
        self.seed_if_empty()
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), VitrinError> {
        self.db.flush()?;
        Ok(())
    }
}

/// The default snapshot stored for a content file on first load
fn default_snapshot(file: ContentFile) -> Result<Value, VitrinError> {
    let value = match file {
        ContentFile::Data => serde_json::to_value(SiteContent::default())?,
        ContentFile::About => serde_json::to_value(default_about())?,
        ContentFile::Settings => serde_json::to_value(default_settings())?,
        ContentFile::Index => serde_json::to_value(default_index_page())?,
    };
    Ok(value)
}
