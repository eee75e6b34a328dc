use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use crate::cli::Cli;
use crate::commands::{handle_check, handle_codes, handle_pull};
use crate::services::storage::{audit, load_config};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        audit(
            "run_failed",
            serde_json::json!({ "error": format!("{err:#}") }),
        );
        if cli.json {
            println!(
                "{}",
                serde_json::json!({ "ok": false, "error": format!("{err:#}") })
            );
        } else {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    if handle_pull(cli, &config)? {
        return Ok(());
    }
    if handle_codes(cli)? {
        return Ok(());
    }
    if handle_check(cli, &config)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}
