//! Command-line configuration and log setup for the dashboard binary.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::error::AppError;

/// Browse a repository file tree and its CI pipeline in the terminal.
#[derive(Debug, Parser)]
#[command(name = "gitdeck", version, about)]
pub struct Cli {
    /// Append logs to this file; logging is disabled when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,
    /// How long to wait for input before redrawing, in milliseconds.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 250,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_rate_ms: u64,
}

impl Cli {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Installs a file-backed `tracing` subscriber when `--log-file` is set.
    ///
    /// The terminal is owned by the TUI, so logs never go to stdout.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init_logging(&self) -> Result<(), AppError> {
        let Some(path) = self.log_file.as_deref() else {
            return Ok(());
        };

        let file = open_log_file(path)?;
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(self.log_level)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|error| AppError::Logging(error.to_string()))
    }
}

/// Opens `path` for appending, creating it when missing.
fn open_log_file(path: &Path) -> Result<File, AppError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}
