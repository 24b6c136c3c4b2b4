//! `catalog` entry point: resolve configuration, open the store, run one
//! command and print its envelope.

use anyhow::{Context, Result};
use catalog_cli::commands;
use catalog_cli::response::Envelope;
use catalog_cli::Cli;
use catalog_core::db::open_db;
use clap::Parser;
use log::{info, warn};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("catalog: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.config()?;

    catalog_core::init_logging(&config.log_level, &config.log_dir.to_string_lossy())
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create database directory `{}`", parent.display())
        })?;
    }
    let conn = open_db(&config.db_path).with_context(|| {
        format!("failed to open catalog database `{}`", config.db_path.display())
    })?;

    let started = Instant::now();
    let envelope = match commands::execute(cli.command, &conn) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(
                "event=command module=cli status=error code={}",
                err.status().code()
            );
            Envelope::from_error(&err)
        }
    };
    info!(
        "event=command module=cli status={} duration_ms={}",
        envelope.status.code(),
        started.elapsed().as_millis()
    );

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(envelope.exit_code())
}
