//! Names and cache keys for the content files and collections.
//!
//! The local cache mirrors each logical content file under a namespaced
//! key; collections are backed by an index file plus per-member files.

/// Prefix for every key this system owns in the local cache
pub const CACHE_NAMESPACE: &str = "cms_";

/// The four top-level content files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFile {
    /// data.json - root aggregate (pages, products, settings, ...)
    Data,
    /// about.json - about-page copy
    About,
    /// settings.json - store identity and contact fields
    Settings,
    /// index.json - home-page record overrides
    Index,
}

impl ContentFile {
    pub const ALL: [ContentFile; 4] = [
        ContentFile::Data,
        ContentFile::About,
        ContentFile::Settings,
        ContentFile::Index,
    ];

    /// File name inside the content directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ContentFile::Data => "data.json",
            ContentFile::About => "about.json",
            ContentFile::Settings => "settings.json",
            ContentFile::Index => "index.json",
        }
    }

    /// Namespaced key this file is cached under
    pub fn cache_key(&self) -> String {
        format!("{}{}", CACHE_NAMESPACE, self.file_name())
    }

    /// Reverse lookup from a file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.file_name() == name)
    }
}

/// The ordered collections backed by an index file plus member files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    Testimonials,
    Gallery,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Products,
        Collection::Testimonials,
        Collection::Gallery,
    ];

    /// Directory under the content root holding this collection
    pub fn dir(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Testimonials => "testimonials",
            Collection::Gallery => "gallery",
        }
    }

    /// Relative path of the collection's index file
    pub fn index_path(&self) -> String {
        format!("{}/index.json", self.dir())
    }

    /// JSON field inside the index file listing member file names
    pub fn index_key(&self) -> &'static str {
        self.dir()
    }

    /// Reverse lookup from a directory name
    pub fn from_dir(dir: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir() == dir)
    }

    /// Split a `<dir>/<file>` relative path into a collection and member
    /// file name; index files and nested paths are not members
    pub fn split_member(rel: &str) -> Option<(Collection, &str)> {
        let (dir, file) = rel.split_once('/')?;
        if file.contains('/') || file == "index.json" {
            return None;
        }
        Collection::from_dir(dir).map(|collection| (collection, file))
    }

    /// Static discovery fallback used when the index file is absent
    pub fn well_known_files(&self) -> &'static [&'static str] {
        match self {
            Collection::Products => &[
                "mens-shirt-1.json",
                "mens-shirt-2.json",
                "mens-shirt-3.json",
                "mens-shirt-4.json",
                "mens-shirt-5.json",
                "mens-shirt-6.json",
                "womens-dress-1.json",
                "womens-dress-2.json",
                "womens-dress-3.json",
                "womens-dress-4.json",
                "kids-tshirt-1.json",
                "accessories-bag-1.json",
            ],
            Collection::Testimonials => &[
                "testimonial-1.json",
                "testimonial-2.json",
                "testimonial-3.json",
            ],
            Collection::Gallery => &[
                "gallery-1.json",
                "gallery-2.json",
                "gallery-3.json",
                "gallery-4.json",
                "gallery-5.json",
                "gallery-6.json",
                "gallery-7.json",
                "gallery-8.json",
                "gallery-9.json",
                "gallery-10.json",
                "gallery-11.json",
                "gallery-12.json",
            ],
        }
    }
}

/// Whether a cache key belongs to this system's namespace
pub fn is_namespaced_key(key: &str) -> bool {
    key.starts_with(CACHE_NAMESPACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_are_namespaced() {
        for file in ContentFile::ALL {
            assert!(is_namespaced_key(&file.cache_key()));
        }
        assert!(!is_namespaced_key("theme_preference"));
    }

    #[test]
    fn test_file_name_round_trip() {
        for file in ContentFile::ALL {
            assert_eq!(ContentFile::from_file_name(file.file_name()), Some(file));
        }
        assert_eq!(ContentFile::from_file_name("unknown.json"), None);
    }

    #[test]
    fn test_collection_index_paths() {
        assert_eq!(Collection::Products.index_path(), "products/index.json");
        assert_eq!(Collection::Gallery.index_key(), "gallery");
        assert_eq!(Collection::from_dir("testimonials"), Some(Collection::Testimonials));
        assert_eq!(Collection::from_dir("images"), None);
    }

    #[test]
    fn test_split_member() {
        assert_eq!(
            Collection::split_member("products/p1.json"),
            Some((Collection::Products, "p1.json"))
        );
        assert_eq!(Collection::split_member("products/index.json"), None);
        assert_eq!(Collection::split_member("data.json"), None);
        assert_eq!(Collection::split_member("images/a/b.json"), None);
    }
}
