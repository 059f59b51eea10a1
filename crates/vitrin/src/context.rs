use libvitrin_core::{CacheStore, ContentDir, LockedCache, SiteConfig, VitrinError};

use crate::cli::Cli;

/// Resolved configuration shared by the command implementations
pub struct VitrinContext {
    pub config: SiteConfig,
}

impl VitrinContext {
    pub fn resolve(cli: &Cli) -> Result<Self, VitrinError> {
        let mut config = SiteConfig::load(&cli.config)?;
        if let Some(site_root) = &cli.site_root {
            config.site_root = site_root.clone();
        }
        Ok(Self { config })
    }

    pub fn content_dir(&self) -> ContentDir {
        ContentDir::new(self.config.content_root())
    }

    /// Open the local cache with the exclusive lock; a running process
    /// holding the lock yields CacheBusy
    pub fn open_cache(&self) -> Result<LockedCache, VitrinError> {
        CacheStore::open_locked(&self.config.cache_db())
    }
}
