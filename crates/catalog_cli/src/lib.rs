//! # catalog_cli
//!
//! Request-handling layer for the library catalog. Each invocation runs one
//! manager operation and prints one JSON response envelope.
//!
//! ## Commands
//!
//! - `catalog author <verb>` - author CRUD
//! - `catalog category <verb>` - category CRUD
//! - `catalog book <verb>` - book CRUD
//!
//! ## Configuration
//!
//! Flags fall back to environment variables:
//!
//! - `CATALOG_DB_PATH` - SQLite database file
//! - `CATALOG_LOG_LEVEL` - `trace|debug|info|warn|error`
//! - `CATALOG_LOG_DIR` - directory for rolling log files

pub mod commands;
pub mod config;
pub mod response;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{BookCommand, NamedCommand};

/// Library catalog command-line interface.
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file.
    #[arg(long, env = "CATALOG_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Log level.
    #[arg(long, env = "CATALOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for log files.
    #[arg(long, env = "CATALOG_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Entity to operate on.
    #[command(subcommand)]
    pub command: Commands,
}

/// Entity subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage authors.
    Author {
        #[command(subcommand)]
        command: NamedCommand,
    },
    /// Manage categories.
    Category {
        #[command(subcommand)]
        command: NamedCommand,
    },
    /// Manage books.
    Book {
        #[command(subcommand)]
        command: BookCommand,
    },
}
