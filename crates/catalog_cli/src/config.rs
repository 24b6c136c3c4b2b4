//! Effective runtime configuration.

use anyhow::{anyhow, Context, Result};
use catalog_core::default_log_level;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::Cli;

const DB_FILE_NAME: &str = "catalog.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Resolved configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Normalized by `init_logging`.
    pub log_level: String,
    /// Always absolute.
    pub log_dir: PathBuf,
}

impl Cli {
    /// Resolves the effective configuration from flags, environment and
    /// platform data directories.
    pub fn config(&self) -> Result<Config> {
        let data_dir = || -> Result<PathBuf> {
            ProjectDirs::from("", "", "catalog")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| anyhow!("could not locate a data directory; pass --db and --log-dir"))
        };

        let db_path = match &self.db {
            Some(path) => path.clone(),
            None => data_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match &self.log_dir {
            Some(path) => absolutize(path)?,
            None => data_dir()?.join(LOG_DIR_NAME),
        };
        let log_level = self
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Config {
            db_path,
            log_level,
            log_dir,
        })
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
