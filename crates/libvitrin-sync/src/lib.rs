//! Cross-surface synchronization for vitrin.
//!
//! A [`SyncBridge`] fans typed change events out to subscribed page
//! controllers; a [`PageController`] owns one page's document and
//! re-renders it on every event, with last-load-wins resolution when
//! reloads overlap.

pub mod bridge;
pub mod controller;

pub use bridge::{SyncBridge, SyncEvent};
pub use controller::PageController;
