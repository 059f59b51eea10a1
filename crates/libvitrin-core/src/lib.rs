//! Core library for vitrin
//!
//! This crate provides:
//! - The content data model (`SiteContent` and its records)
//! - Built-in default content (`SiteContent::default()` is always fully populated)
//! - Shallow merge rules for page-like records
//! - The filesystem content directory (`ContentDir`)
//! - The sled-backed local cache (`CacheStore`)
//! - Configuration (`SiteConfig`) and the shared error type (`VitrinError`)

pub mod config;
pub mod defaults;
pub mod error;
pub mod merge;
pub mod store;
pub mod types;

pub use config::SiteConfig;
pub use error::VitrinError;
pub use store::cache::{CacheStore, LockedCache};
pub use store::content_dir::ContentDir;
pub use types::content::{
    AboutPage, GalleryItem, PageRecord, Product, Settings, SiteContent, Testimonial,
};
pub use types::files::{is_namespaced_key, Collection, ContentFile, CACHE_NAMESPACE};
pub use types::page::PageKind;

/// Default interval between periodic re-sync ticks, in seconds
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;

/// Default settling delay after a publish notification before refetching, in milliseconds
pub const DEFAULT_PUBLISH_SETTLE_MS: u64 = 1_000;

/// Image substituted when a rendered image fails to load
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// Number of gallery items per carousel row
pub const GALLERY_ROW_SIZE: usize = 4;
