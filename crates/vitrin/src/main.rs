//! Vitrin CLI
//!
//! Seeds, inspects, and edits the JSON content directory and the local
//! cache, backs the cache up and restores it, and renders storefront
//! pages from either source.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use libvitrin_core::VitrinError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_command(&cli) {
        output::output_error(&cli, &e);
        std::process::exit(e.exit_code());
    }
}

fn run_command(cli: &Cli) -> Result<(), VitrinError> {
    match &cli.command {
        Command::Init { force } => commands::init::run(cli, *force),
        Command::Content { cmd } => commands::content::run(cli, cmd.clone()),
        Command::Cache { cmd } => commands::cache::run(cli, cmd.clone()),
        Command::Export { out } => commands::backup::run_export(cli, out.clone()),
        Command::Import { file } => commands::backup::run_import(cli, file.clone()),
        Command::Render { page, server, out } => {
            commands::render::run(cli, page, server.as_deref(), out.clone())
        }
    }
}
