//! Page controller: one document, one loader, event-driven re-rendering.
//!
//! Overlapping reloads resolve last-load-wins: each reload takes a
//! monotonically increasing generation before loading, and its result is
//! applied only if no later generation has been applied already.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use libvitrin_client::{ContentClient, DataLoader};
use libvitrin_core::{
    is_namespaced_key, PageKind, SiteContent, DEFAULT_PUBLISH_SETTLE_MS, DEFAULT_SYNC_INTERVAL_SECS,
};
use libvitrin_render::{Document, Renderer};

use crate::bridge::{SyncBridge, SyncEvent};

/// Drives one page's document from the loader in response to sync events
pub struct PageController<C: ContentClient> {
    loader: DataLoader<C>,
    renderer: Renderer,
    kind: PageKind,
    doc: Mutex<Document>,
    interval: Duration,
    settle: Duration,
    generation: AtomicU64,
    applied: Mutex<u64>,
}

impl<C: ContentClient> PageController<C> {
    pub fn new(loader: DataLoader<C>, renderer: Renderer, kind: PageKind) -> Self {
        Self {
            loader,
            renderer,
            kind,
            doc: Mutex::new(Document::storefront(kind)),
            interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
            settle: Duration::from_millis(DEFAULT_PUBLISH_SETTLE_MS),
            generation: AtomicU64::new(0),
            applied: Mutex::new(0),
        }
    }

    /// Override the periodic freshness interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the settle delay applied after a publish completes
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Take a generation number for a reload that is about to start
    pub fn begin_load(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a finished reload's content. Returns false when a later
    /// generation was applied first, in which case the document is
    /// untouched.
    pub fn complete_load(&self, generation: u64, content: &SiteContent) -> bool {
        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        if generation <= *applied {
            debug!(generation, applied = *applied, "stale reload discarded");
            return false;
        }
        let mut doc = self.doc.lock().unwrap_or_else(|e| e.into_inner());
        self.renderer.render(content, self.kind, &mut doc);
        *applied = generation;
        true
    }

    /// Reload the content and re-render the page, last-load-wins
    pub fn refresh(&self) -> bool {
        let generation = self.begin_load();
        let content = self.loader.load();
        self.complete_load(generation, &content)
    }

    /// React to one sync event. Returns whether a re-render was applied.
    pub fn handle(&self, event: &SyncEvent) -> bool {
        match event {
            SyncEvent::CacheKeyChanged { key } => {
                if !is_namespaced_key(key) {
                    return false;
                }
                info!(key, page = ?self.kind, "cache change, refreshing");
                self.refresh()
            }
            SyncEvent::ContentSaved { file } => {
                info!(file = file.file_name(), page = ?self.kind, "content saved, refreshing");
                self.refresh()
            }
            SyncEvent::Tick => self.refresh(),
            SyncEvent::PublishCompleted => {
                // let the store settle before reading back
                thread::sleep(self.settle);
                info!(page = ?self.kind, "publish completed, refreshing");
                self.refresh()
            }
            SyncEvent::Shutdown => false,
        }
    }

    /// Subscribe to the bridge and process events until shutdown,
    /// refreshing on the periodic interval when no event arrives
    pub fn run(&self, bridge: &SyncBridge) {
        let rx = bridge.subscribe();
        self.refresh();
        loop {
            match rx.recv_timeout(self.interval) {
                Ok(SyncEvent::Shutdown) => {
                    debug!(page = ?self.kind, "shutdown, controller stopping");
                    return;
                }
                Ok(event) => {
                    self.handle(&event);
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.handle(&SyncEvent::Tick);
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!(page = ?self.kind, "bridge gone, controller stopping");
                    return;
                }
            }
        }
    }

    /// Read the current document
    pub fn with_document<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        let doc = self.doc.lock().unwrap_or_else(|e| e.into_inner());
        f(&doc)
    }

    /// Serialize the current document
    pub fn html(&self) -> String {
        self.with_document(|doc| doc.to_html())
    }
}
