pub mod backup;
pub mod cache;
pub mod content;
pub mod init;
pub mod render;
