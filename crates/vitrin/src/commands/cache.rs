use serde::Serialize;

use libvitrin_core::VitrinError;

use crate::cli::{CacheCommand, Cli};
use crate::context::VitrinContext;
use crate::output::{output_success, print_human};

pub fn run(cli: &Cli, cmd: CacheCommand) -> Result<(), VitrinError> {
    match cmd {
        CacheCommand::Keys => run_keys(cli),
        CacheCommand::Clear => run_clear(cli),
    }
}

#[derive(Serialize)]
struct KeysOutput {
    keys: Vec<String>,
}

fn run_keys(cli: &Cli) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let cache = ctx.open_cache()?;

    let mut keys = cache.keys();
    keys.sort();
    if cli.json {
        output_success(cli, KeysOutput { keys });
    } else {
        for key in keys {
            print_human(cli, &key);
        }
    }
    Ok(())
}

fn run_clear(cli: &Cli) -> Result<(), VitrinError> {
    let ctx = VitrinContext::resolve(cli)?;
    let cache = ctx.open_cache()?;

    cache.clear_all()?;
    print_human(cli, "Cache cleared and re-seeded with defaults");
    Ok(())
}
