use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;

use libvitrin_client::{CachedContentClient, DataLoader};
use libvitrin_core::VitrinError;

use crate::cli::Cli;
use crate::context::VitrinContext;
use crate::output::output_success;

#[derive(Serialize)]
struct ExportOutput {
    file: String,
    keys: usize,
}

/// Write every cached content file into one dated backup document
pub fn run_export(cli: &Cli, out: Option<PathBuf>) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let cache = ctx.open_cache()?;
    let loader = DataLoader::new(CachedContentClient::new(cache.shared()), cache.shared());

    let backup = loader.export_all();
    let keys = backup.as_object().map(|m| m.len()).unwrap_or(0);

    let out = out.unwrap_or_else(|| {
        PathBuf::from(format!(
            "vitrin-backup-{}.json",
            Local::now().format("%Y-%m-%d")
        ))
    });
    std::fs::write(&out, serde_json::to_vec_pretty(&backup)?)?;

    output_success(
        cli,
        ExportOutput {
            file: out.display().to_string(),
            keys,
        },
    );
    Ok(())
}

#[derive(Serialize)]
struct ImportOutput {
    file: String,
}

/// Restore a backup document into the local cache
pub fn run_import(cli: &Cli, file: PathBuf) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let cache = ctx.open_cache()?;
    let loader = DataLoader::new(CachedContentClient::new(cache.shared()), cache.shared());

    let raw = std::fs::read_to_string(&file)?;
    let backup = serde_json::from_str(&raw)?;
    loader.import_all(&backup)?;

    output_success(
        cli,
        ImportOutput {
            file: file.display().to_string(),
        },
    );
    Ok(())
}
