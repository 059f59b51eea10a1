use std::io::Read;
use std::path::Path;

use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

use libvitrin_core::{Collection, VitrinError};

use crate::cli::{Cli, ContentCommand};
use crate::context::VitrinContext;
use crate::output::{output_success, print_human};

pub fn run(cli: &Cli, cmd: ContentCommand) -> Result<(), VitrinError> {
    match cmd {
        ContentCommand::List => run_list(cli),
        ContentCommand::Get { rel } => run_get(cli, &rel),
        ContentCommand::Put { rel, input } => run_put(cli, &rel, &input),
        ContentCommand::Rm { rel } => run_rm(cli, &rel),
    }
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    size_bytes: u64,
}

fn run_list(cli: &Cli) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let content = ctx.content_dir();

    let mut entries = Vec::new();
    for rel in content.list()? {
        let size_bytes = content
            .path_for(&rel)
            .ok()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .unwrap_or(0);
        entries.push(FileEntry {
            path: rel,
            size_bytes,
        });
    }

    if cli.json {
        output_success(cli, entries);
    } else if !cli.quiet {
        let mut table = Table::new();
        table.set_header(["FILE", "BYTES"]);
        for entry in &entries {
            table.add_row([entry.path.clone(), entry.size_bytes.to_string()]);
        }
        println!("{table}");
    }
    Ok(())
}

fn run_get(cli: &Cli, rel: &str) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let value = ctx.content_dir().read(rel)?;
    output_success(cli, value);
    Ok(())
}

/// Write one content file. Collection member paths also register the
/// file in that collection's index, the same as a server-side save.
fn run_put(cli: &Cli, rel: &str, input: &Path) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let content = ctx.content_dir();

    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    let value: Value = serde_json::from_str(&raw)?;

    match Collection::split_member(rel) {
        Some((collection, file)) => content.write_member(collection, file, &value)?,
        None => content.write(rel, &value)?,
    }
    print_human(cli, &format!("Saved {}", rel));
    Ok(())
}

/// Delete one content file; a file inside a folder also leaves that
/// folder's index when one exists
fn run_rm(cli: &Cli, rel: &str) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let content = ctx.content_dir();

    match split_folder_member(rel) {
        Some((dir, file)) => content.delete_member(dir, file)?,
        None => content.delete(rel)?,
    }
    print_human(cli, &format!("Deleted {}", rel));
    Ok(())
}

/// `<folder>/<file>` paths one level deep, excluding the index file itself
fn split_folder_member(rel: &str) -> Option<(&str, &str)> {
    let (dir, file) = rel.split_once('/')?;
    if file.contains('/') || file == "index.json" {
        return None;
    }
    Some((dir, file))
}
