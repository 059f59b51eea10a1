//! Shallow merge rules for page-like records.
//!
//! Merge order is defaults < cached < fetched: later layers override
//! earlier ones key by key. Only the top level of an object is merged;
//! nested values are replaced whole.

use serde_json::Value;

/// Overlay `overlay`'s keys onto `base`. Non-object overlays replace the
/// base entirely; null overlays are ignored.
pub fn shallow_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                base_map.insert(key.clone(), value.clone());
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_overlay_overrides_earlier() {
        let mut merged = json!({"hero_title": "Default", "arrival_title": "#NewArrivals"});
        shallow_merge(&mut merged, &json!({"hero_title": "Cached"}));
        shallow_merge(&mut merged, &json!({"hero_title": "Fetched", "extra": "kept"}));
        assert_eq!(merged["hero_title"], "Fetched");
        assert_eq!(merged["arrival_title"], "#NewArrivals");
        assert_eq!(merged["extra"], "kept");
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut base = json!({"nested": {"a": 1, "b": 2}});
        shallow_merge(&mut base, &json!({"nested": {"a": 9}}));
        // nested objects are replaced whole, not merged
        assert_eq!(base["nested"], json!({"a": 9}));
    }

    #[test]
    fn test_null_overlay_is_ignored() {
        let mut base = json!({"a": 1});
        shallow_merge(&mut base, &Value::Null);
        assert_eq!(base["a"], 1);
    }
}
