use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitrin", about = "File-backed storefront CMS", version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress human-readable output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Site configuration file
    #[arg(long, global = true, default_value = "vitrin.toml")]
    pub config: PathBuf,

    /// Override the site root directory
    #[arg(long, global = true)]
    pub site_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed the content directory and local cache with the built-in defaults
    Init {
        /// Re-seed even if content files already exist
        #[arg(long)]
        force: bool,
    },

    /// Content directory commands
    Content {
        #[command(subcommand)]
        cmd: ContentCommand,
    },

    /// Local cache commands
    Cache {
        #[command(subcommand)]
        cmd: CacheCommand,
    },

    /// Export every cached content file as one backup document
    Export {
        /// Output file (default: vitrin-backup-<date>.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import a backup document into the local cache
    Import {
        /// Backup file produced by export
        file: PathBuf,
    },

    /// Load content and render one page to HTML
    Render {
        /// Page to render (e.g. index.html, about.html)
        page: String,

        /// Load over HTTP from a content server instead of the local cache
        #[arg(long)]
        server: Option<String>,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Subcommand)]
pub enum ContentCommand {
    /// List all content files
    List,

    /// Print one content file
    Get {
        /// Path relative to the content root (e.g. products/p1.json)
        rel: String,
    },

    /// Write one content file from a JSON document
    Put {
        /// Path relative to the content root
        rel: String,

        /// Input file holding the JSON document ("-" for stdin)
        input: PathBuf,
    },

    /// Delete one content file; files inside a folder also leave that
    /// folder's index
    Rm {
        /// Path relative to the content root
        rel: String,
    },
}

#[derive(Clone, Subcommand)]
pub enum CacheCommand {
    /// List the cache keys this system owns
    Keys,

    /// Delete every owned key and re-seed the defaults
    Clear,
}
