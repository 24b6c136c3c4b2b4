//! Entity command handlers.
//!
//! Each handler checks payload shape, builds the manager over the shared
//! connection, runs exactly one operation and returns its envelope.

mod author;
mod book;
mod category;

use clap::Subcommand;
use rusqlite::Connection;

use crate::response::{CommandError, Envelope};
use crate::Commands;

/// Verbs shared by the name-keyed entities (authors, categories).
#[derive(Debug, Subcommand)]
pub enum NamedCommand {
    /// Create a new entry.
    Create {
        #[arg(long)]
        name: String,
    },
    /// List every entry.
    List,
    /// Show one entry.
    Get { id: i64 },
    /// Rename an entry.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an entry.
    Delete { id: i64 },
}

/// Book verbs.
#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// Create a book bound to an existing author and category.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author_id: i64,
        #[arg(long)]
        category_id: i64,
    },
    /// List every book.
    List,
    /// Show one book.
    Get { id: i64 },
    /// Change any subset of title, author and category.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author_id: Option<i64>,
        #[arg(long)]
        category_id: Option<i64>,
    },
    /// Delete a book.
    Delete { id: i64 },
}

/// Runs one command against an initialized catalog database.
pub fn execute(command: Commands, conn: &Connection) -> Result<Envelope, CommandError> {
    match command {
        Commands::Author { command } => author::execute(command, conn),
        Commands::Category { command } => category::execute(command, conn),
        Commands::Book { command } => book::execute(command, conn),
    }
}
