//! Content Store: the directory of JSON files treated as the system of record.
//!
//! Collection index files are the authoritative ordering and membership
//! set; member files hold content. Writes are whole-file (write to a temp
//! file, then rename) so no partial file survives a failure.

use std::path::{Component, Path, PathBuf};

use serde_json::{json, Value};
use tracing::debug;

use crate::defaults::{default_about, default_index_page, default_settings};
use crate::error::VitrinError;
use crate::types::content::SiteContent;
use crate::types::files::Collection;

/// Filesystem content directory
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path inside the content root, rejecting traversal
    pub fn path_for(&self, rel: &str) -> Result<PathBuf, VitrinError> {
        let rel_path = Path::new(rel);
        for component in rel_path.components() {
            match component {
                Component::Normal(_) => {}
                _ => {
                    return Err(VitrinError::InvalidArgs(format!(
                        "invalid content path '{}'",
                        rel
                    )))
                }
            }
        }
        Ok(self.root.join(rel_path))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path_for(rel).map(|p| p.exists()).unwrap_or(false)
    }

    /// Read and parse one content file
    pub fn read(&self, rel: &str) -> Result<Value, VitrinError> {
        let path = self.path_for(rel)?;
        if !path.exists() {
            return Err(VitrinError::file_not_found(rel));
        }
        let raw = std::fs::read(&path)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Read one content file as raw bytes (served verbatim over HTTP)
    pub fn read_bytes(&self, rel: &str) -> Result<Vec<u8>, VitrinError> {
        let path = self.path_for(rel)?;
        if !path.exists() {
            return Err(VitrinError::file_not_found(rel));
        }
        Ok(std::fs::read(&path)?)
    }

    /// Write one content file whole (pretty-printed, parents created,
    /// temp-file-then-rename)
    pub fn write(&self, rel: &str, value: &Value) -> Result<(), VitrinError> {
        let path = self.path_for(rel)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &path)?;
        debug!(rel, "wrote content file");
        Ok(())
    }

    /// Delete one content file; NotFound when absent
    pub fn delete(&self, rel: &str) -> Result<(), VitrinError> {
        let path = self.path_for(rel)?;
        if !path.exists() {
            return Err(VitrinError::file_not_found(rel));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    /// Ordered membership list from a collection's index file, if present
    pub fn index(&self, collection: Collection) -> Option<Vec<String>> {
        let value = self.read(&collection.index_path()).ok()?;
        index_members(&value, collection.index_key())
    }

    /// Append a filename to a directory's index file, creating it if
    /// absent. Idempotent: adding an existing member is a no-op.
    /// Returns whether the index changed.
    pub fn add_to_index(&self, dir: &str, file: &str) -> Result<bool, VitrinError> {
        let index_rel = format!("{}/index.json", dir);
        let mut members = self
            .read(&index_rel)
            .ok()
            .and_then(|v| index_members(&v, dir))
            .unwrap_or_default();

        if members.iter().any(|m| m == file) {
            return Ok(false);
        }
        members.push(file.to_string());
        self.write(&index_rel, &json!({ dir: members }))?;
        Ok(true)
    }

    /// Remove a filename from a directory's index file when one exists.
    /// Returns whether the index changed.
    pub fn remove_from_index(&self, dir: &str, file: &str) -> Result<bool, VitrinError> {
        let index_rel = format!("{}/index.json", dir);
        let Some(mut members) = self
            .read(&index_rel)
            .ok()
            .and_then(|v| index_members(&v, dir))
        else {
            return Ok(false);
        };

        let before = members.len();
        members.retain(|m| m != file);
        if members.len() == before {
            return Ok(false);
        }
        self.write(&index_rel, &json!({ dir: members }))?;
        Ok(true)
    }

    /// Write a collection member and add it to the index (idempotent
    /// membership add)
    pub fn write_member(
        &self,
        collection: Collection,
        file: &str,
        value: &Value,
    ) -> Result<(), VitrinError> {
        self.write(&format!("{}/{}", collection.dir(), file), value)?;
        self.add_to_index(collection.dir(), file)?;
        Ok(())
    }

    /// Delete a member file and drop it from that directory's index.
    /// Per-collection only: no cross-collection cascade.
    pub fn delete_member(&self, dir: &str, file: &str) -> Result<(), VitrinError> {
        self.delete(&format!("{}/{}", dir, file))?;
        self.remove_from_index(dir, file)?;
        Ok(())
    }

    /// All content files, as sorted relative paths
    pub fn list(&self) -> Result<Vec<String>, VitrinError> {
        let mut out = Vec::new();
        if self.root.exists() {
            collect_files(&self.root, &self.root, &mut out)?;
        }
        out.sort();
        Ok(out)
    }

    /// Write the built-in default content tree (top-level files plus
    /// per-member collection files and their indexes)
    pub fn seed_defaults(&self) -> Result<(), VitrinError> {
        let content = SiteContent::default();

        self.write("data.json", &serde_json::to_value(&content)?)?;
        self.write("about.json", &serde_json::to_value(default_about())?)?;
        self.write("settings.json", &serde_json::to_value(default_settings())?)?;
        self.write("index.json", &serde_json::to_value(default_index_page())?)?;

        let members: [(Collection, Vec<Value>); 3] = [
            (
                Collection::Products,
                content
                    .products
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<_, _>>()?,
            ),
            (
                Collection::Testimonials,
                content
                    .testimonials
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<_, _>>()?,
            ),
            (
                Collection::Gallery,
                content
                    .gallery
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<_, _>>()?,
            ),
        ];

        for (collection, values) in members {
            for (file, value) in collection.well_known_files().iter().zip(&values) {
                self.write_member(collection, file, value)?;
            }
        }
        Ok(())
    }
}

/// Extract the ordered member list from an index file value
fn index_members(value: &Value, key: &str) -> Option<Vec<String>> {
    let list = value.get(key)?.as_array()?;
    Some(
        list.iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.to_string())
            .collect(),
    )
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<(), VitrinError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else if let Ok(rel) = path.strip_prefix(root) {
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_content() -> (tempfile::TempDir, ContentDir) {
        let dir = tempfile::tempdir().unwrap();
        let content = ContentDir::new(dir.path().join("content"));
        (dir, content)
    }

    #[test]
    fn test_write_read_round_trip() {
        let (_dir, content) = temp_content();
        let value = json!({"title": "Shirt", "price": "$75"});
        content.write("products/p1.json", &value).unwrap();
        assert_eq!(content.read("products/p1.json").unwrap(), value);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_dir, content) = temp_content();
        match content.read("data.json") {
            Err(VitrinError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_path_traversal_rejected() {
        let (_dir, content) = temp_content();
        assert!(matches!(
            content.read("../outside.json"),
            Err(VitrinError::InvalidArgs(_))
        ));
    }

    #[test]
    fn test_index_membership_add_is_idempotent() {
        let (_dir, content) = temp_content();
        let product = json!({"title": "Shirt"});
        content
            .write_member(Collection::Products, "p3.json", &product)
            .unwrap();
        content
            .write_member(Collection::Products, "p3.json", &product)
            .unwrap();

        let members = content.index(Collection::Products).unwrap();
        assert_eq!(members, vec!["p3.json"]);
    }

    #[test]
    fn test_delete_member_removes_index_entry() {
        let (_dir, content) = temp_content();
        content
            .write_member(Collection::Products, "p1.json", &json!({"title": "A"}))
            .unwrap();
        content
            .write_member(Collection::Products, "p3.json", &json!({"title": "B"}))
            .unwrap();

        content.delete_member("products", "p3.json").unwrap();

        assert!(!content.exists("products/p3.json"));
        let members = content.index(Collection::Products).unwrap();
        assert_eq!(members, vec!["p1.json"]);
    }

    #[test]
    fn test_delete_missing_member_is_not_found() {
        let (_dir, content) = temp_content();
        assert!(matches!(
            content.delete_member("products", "ghost.json"),
            Err(VitrinError::NotFound(_))
        ));
    }

    #[test]
    fn test_index_preserves_insertion_order() {
        let (_dir, content) = temp_content();
        for name in ["c.json", "a.json", "b.json"] {
            content
                .write_member(Collection::Gallery, name, &json!({"title": name}))
                .unwrap();
        }
        assert_eq!(
            content.index(Collection::Gallery).unwrap(),
            vec!["c.json", "a.json", "b.json"]
        );
    }

    #[test]
    fn test_seed_defaults_writes_full_tree() {
        let (_dir, content) = temp_content();
        content.seed_defaults().unwrap();

        assert!(content.exists("data.json"));
        assert!(content.exists("settings.json"));
        assert_eq!(
            content.index(Collection::Products).unwrap().len(),
            Collection::Products.well_known_files().len()
        );
        assert_eq!(content.index(Collection::Testimonials).unwrap().len(), 3);
    }
}
