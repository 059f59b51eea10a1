use serde::Serialize;

use libvitrin_core::VitrinError;

use crate::cli::Cli;
use crate::context::VitrinContext;
use crate::output::output_success;

#[derive(Serialize)]
struct InitOutput {
    content_root: String,
    cache_path: String,
    seeded: bool,
}

/// Seed the content tree and the local cache with the built-in defaults.
/// Existing content is left alone unless `force` is given; the cache
/// seed never clobbers existing keys.
pub fn run(cli: &Cli, force: bool) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let content = ctx.content_dir();

    let seeded = if content.exists("data.json") && !force {
        false
    } else {
        content.seed_defaults()?;
        true
    };

    let cache = ctx.open_cache()?;
    cache.seed_if_empty()?;

    output_success(
        cli,
        InitOutput {
            content_root: ctx.config.content_root().display().to_string(),
            cache_path: ctx.config.cache_db().display().to_string(),
            seeded,
        },
    );
    Ok(())
}
