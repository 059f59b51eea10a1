//! Data Loader: cache -> network -> built-in defaults.
//!
//! `load()` never fails. Loading is field-granular: a failure on one file
//! substitutes the built-in default for that field only, and the rest of
//! the content loads normally.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use libvitrin_core::merge::shallow_merge;
use libvitrin_core::{CacheStore, Collection, ContentFile, SiteContent, VitrinError};

use crate::client::ContentClient;
use crate::error::ClientError;

/// Loads content files into a fully-populated `SiteContent`,
/// populating the local cache as a side effect
pub struct DataLoader<C: ContentClient> {
    client: C,
    cache: Arc<CacheStore>,
}

impl<C: ContentClient> DataLoader<C> {
    pub fn new(client: C, cache: Arc<CacheStore>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Load the full site content. Always resolves: any failure at any
    /// step falls back to the built-in default for that field.
    pub fn load(&self) -> SiteContent {
        let mut root = match serde_json::to_value(SiteContent::default()) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "default content failed to serialize");
                return SiteContent::default();
            }
        };

        // data.json overlays the whole aggregate, top-level shallow
        if let Some(data) = self.file_value(ContentFile::Data) {
            shallow_merge(&mut root, &data);
        }

        // index.json overlays the home page record
        if let Some(index) = self.file_value(ContentFile::Index) {
            merge_into(&mut root, &["pages", "index"], &index);
        }

        // about.json and settings.json overlay their fields
        if let Some(about) = self.file_value(ContentFile::About) {
            merge_into(&mut root, &["about"], &about);
        }
        if let Some(settings) = self.file_value(ContentFile::Settings) {
            merge_into(&mut root, &["site_settings"], &settings);
        }

        // collections replace the aggregate's sequences when any member loads
        for collection in Collection::ALL {
            let members = self.load_collection(collection);
            if !members.is_empty() {
                if let Some(map) = root.as_object_mut() {
                    map.insert(collection.index_key().to_string(), Value::Array(members));
                }
            }
        }

        match serde_json::from_value(root) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "merged content did not deserialize, using defaults");
                SiteContent::default()
            }
        }
    }

    /// Cache-first value for one top-level file.
    ///
    /// A non-empty cached snapshot short-circuits the network entirely.
    /// A fresh fetch is mirrored into the cache before being returned.
    fn file_value(&self, file: ContentFile) -> Option<Value> {
        let key = file.cache_key();
        if let Some(cached) = self.cache.get(&key) {
            if !is_empty(&cached) {
                debug!(key, "cache hit");
                return Some(cached);
            }
        }

        match self.client.fetch(file.file_name()) {
            Ok(value) => {
                if let Err(e) = self.cache.put(&key, &value) {
                    warn!(key, error = %e, "failed to mirror fetch into cache");
                }
                Some(value)
            }
            Err(e) if e.is_not_found() => {
                debug!(file = file.file_name(), "content file absent, using defaults");
                None
            }
            Err(e) => {
                warn!(file = file.file_name(), error = %e, "fetch failed, using defaults");
                None
            }
        }
    }

    /// Load a collection's members in index order, skipping members that
    /// are absent or unparseable. An absent index file falls back to the
    /// static well-known file list.
    fn load_collection(&self, collection: Collection) -> Vec<Value> {
        let listed = match self.client.fetch(&collection.index_path()) {
            Ok(value) => index_members(&value, collection.index_key()),
            Err(e) => {
                if !e.is_not_found() {
                    warn!(collection = collection.dir(), error = %e, "index fetch failed");
                }
                None
            }
        };

        let files: Vec<String> = listed.unwrap_or_else(|| {
            collection
                .well_known_files()
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        let mut members = Vec::new();
        for file in &files {
            match self.client.fetch(&format!("{}/{}", collection.dir(), file)) {
                Ok(value) => members.push(value),
                Err(e) => {
                    debug!(collection = collection.dir(), file, error = %e, "skipping member");
                }
            }
        }
        members
    }

    /// Persist a full snapshot for one file into the local cache
    /// (the admin write path calls this after a successful save)
    pub fn save(&self, file: ContentFile, value: &Value) -> Result<(), VitrinError> {
        self.cache.put(&file.cache_key(), value)
    }

    /// Export every cached content file as one backup document
    pub fn export_all(&self) -> Value {
        let mut out = Map::new();
        for file in ContentFile::ALL {
            let name = file
                .file_name()
                .trim_end_matches(".json")
                .to_string();
            let value = self
                .cache
                .get(&file.cache_key())
                .unwrap_or(Value::Object(Map::new()));
            out.insert(name, value);
        }
        Value::Object(out)
    }

    /// Import a backup document produced by `export_all`
    pub fn import_all(&self, backup: &Value) -> Result<(), VitrinError> {
        for file in ContentFile::ALL {
            let name = file.file_name().trim_end_matches(".json");
            if let Some(value) = backup.get(name) {
                if !value.is_null() {
                    self.save(file, value)?;
                }
            }
        }
        Ok(())
    }
}

/// Merge an overlay into a nested object slot, creating the path as needed
fn merge_into(root: &mut Value, path: &[&str], overlay: &Value) {
    let mut slot = root;
    for segment in path {
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let map = match slot.as_object_mut() {
            Some(map) => map,
            None => return,
        };
        slot = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    shallow_merge(slot, overlay);
}

fn index_members(value: &Value, key: &str) -> Option<Vec<String>> {
    let list = value.get(key)?.as_array()?;
    Some(
        list.iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.to_string())
            .collect(),
    )
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory content store for loader tests
    struct MockClient {
        files: Mutex<HashMap<String, Value>>,
        unreachable: bool,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
                unreachable: false,
            }
        }

        fn offline() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
                unreachable: true,
            }
        }

        fn insert(&self, rel: &str, value: Value) {
            self.files.lock().unwrap().insert(rel.to_string(), value);
        }
    }

    impl ContentClient for MockClient {
        fn fetch(&self, rel_path: &str) -> Result<Value, ClientError> {
            if self.unreachable {
                return Err(ClientError::Http("connection refused".into()));
            }
            self.files
                .lock()
                .unwrap()
                .get(rel_path)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(rel_path.to_string()))
        }
    }

    fn temp_cache() -> (tempfile::TempDir, Arc<CacheStore>) {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(CacheStore::open(&dir.path().join("cache")).unwrap());
        (dir, cache)
    }

    #[test]
    fn test_unreachable_store_loads_full_defaults() {
        let (_dir, cache) = temp_cache();
        let loader = DataLoader::new(MockClient::offline(), cache);

        let content = loader.load();
        assert_eq!(content, SiteContent::default());
        assert!(!content.products.is_empty());
        assert!(!content.site_settings.store_name.is_empty());
    }

    #[test]
    fn test_fetch_mirrors_into_cache() {
        let (_dir, cache) = temp_cache();
        let client = MockClient::new();
        client.insert("settings.json", json!({"store_name": "Nordby"}));

        let loader = DataLoader::new(client, Arc::clone(&cache));
        let content = loader.load();

        assert_eq!(content.site_settings.store_name, "Nordby");
        let mirrored = cache.get("cms_settings.json").unwrap();
        assert_eq!(mirrored["store_name"], "Nordby");
    }

    #[test]
    fn test_cache_first_skips_network() {
        let (_dir, cache) = temp_cache();
        cache
            .put("cms_settings.json", &json!({"store_name": "FromCache"}))
            .unwrap();

        // network has a different value; the cached one must win because
        // the cache short-circuits the fetch for that file
        let client = MockClient::new();
        client.insert("settings.json", json!({"store_name": "FromNetwork"}));

        let loader = DataLoader::new(client, cache);
        assert_eq!(loader.load().site_settings.store_name, "FromCache");
    }

    #[test]
    fn test_empty_cached_object_falls_through_to_network() {
        let (_dir, cache) = temp_cache();
        cache.put("cms_settings.json", &json!({})).unwrap();

        let client = MockClient::new();
        client.insert("settings.json", json!({"store_name": "FromNetwork"}));

        let loader = DataLoader::new(client, cache);
        assert_eq!(loader.load().site_settings.store_name, "FromNetwork");
    }

    #[test]
    fn test_index_page_overlays_data_pages() {
        let (_dir, cache) = temp_cache();
        let client = MockClient::new();
        client.insert(
            "data.json",
            json!({"pages": {"index": {"hero_title": "From Data", "arrival_title": "Kept"}}}),
        );
        client.insert("index.json", json!({"hero_title": "From Index"}));

        let loader = DataLoader::new(client, cache);
        let content = loader.load();
        let index = &content.pages["index"];
        assert_eq!(index["hero_title"], "From Index");
        assert_eq!(index["arrival_title"], "Kept");
    }

    #[test]
    fn test_collection_follows_index_order_and_skips_missing() {
        let (_dir, cache) = temp_cache();
        let client = MockClient::new();
        client.insert(
            "products/index.json",
            json!({"products": ["b.json", "missing.json", "a.json"]}),
        );
        client.insert("products/b.json", json!({"title": "B"}));
        client.insert("products/a.json", json!({"title": "A"}));

        let loader = DataLoader::new(client, cache);
        let products = loader.load().products;
        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_absent_index_falls_back_to_well_known_files() {
        let (_dir, cache) = temp_cache();
        let client = MockClient::new();
        client.insert(
            "testimonials/testimonial-2.json",
            json!({"name": "Discovered"}),
        );

        let loader = DataLoader::new(client, cache);
        let testimonials = loader.load().testimonials;
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].name, "Discovered");
    }

    #[test]
    fn test_empty_collection_keeps_defaults() {
        let (_dir, cache) = temp_cache();
        let client = MockClient::new();
        client.insert("products/index.json", json!({"products": []}));

        let loader = DataLoader::new(client, cache);
        // nothing loadable: the default catalog stands in
        assert_eq!(loader.load().products, SiteContent::default().products);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (_dir, cache) = temp_cache();
        let loader = DataLoader::new(MockClient::offline(), Arc::clone(&cache));
        loader
            .save(ContentFile::Settings, &json!({"store_name": "Backup"}))
            .unwrap();

        let backup = loader.export_all();
        assert_eq!(backup["settings"]["store_name"], "Backup");

        cache.clear_all().unwrap();
        loader.import_all(&backup).unwrap();
        assert_eq!(
            cache.get("cms_settings.json").unwrap()["store_name"],
            "Backup"
        );
    }
}
