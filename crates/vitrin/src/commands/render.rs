use std::path::PathBuf;

use libvitrin_client::{CachedContentClient, ContentClient, DataLoader, HttpContentClient};
use libvitrin_core::{PageKind, VitrinError};
use libvitrin_render::{Document, Renderer};

use crate::cli::Cli;
use crate::context::VitrinContext;
use crate::output::print_human;

/// Load site content and render one page to HTML, from the content
/// server when `--server` is given or the local cache otherwise
pub fn run(cli: &Cli, page: &str, server: Option<&str>, out: Option<PathBuf>) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let cache = ctx.open_cache()?;

    let client: Box<dyn ContentClient> = match server {
        Some(base_url) => Box::new(HttpContentClient::new(base_url)),
        None => Box::new(CachedContentClient::new(cache.shared())),
    };
    let loader = DataLoader::new(client, cache.shared());

    let kind = PageKind::from_path(page);
    let content = loader.load();

    let mut doc = Document::storefront(kind);
    Renderer::new()
        .with_placeholder(ctx.config.placeholder_image.clone())
        .render(&content, kind, &mut doc);
    let html = doc.to_html();

    match out {
        Some(path) => {
            std::fs::write(&path, html)?;
            print_human(cli, &format!("Rendered {} to {}", page, path.display()));
        }
        None => {
            if !cli.quiet {
                println!("{}", html);
            }
        }
    }
    Ok(())
}
