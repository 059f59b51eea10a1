//! Content client and data loader for vitrin
//!
//! This crate provides:
//! - The `ContentClient` trait: one fetch interface with a network-backed
//!   and a cache-backed implementation, selected by configuration
//! - The `DataLoader`: cache-first loading with field-granular fallback
//!   to built-in defaults, collection index merging, and cache population

pub mod client;
pub mod error;
pub mod loader;

pub use client::{CachedContentClient, ContentClient, HttpContentClient};
pub use error::ClientError;
pub use loader::DataLoader;

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
