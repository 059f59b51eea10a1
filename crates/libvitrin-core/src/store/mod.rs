pub mod cache;
pub mod content_dir;
