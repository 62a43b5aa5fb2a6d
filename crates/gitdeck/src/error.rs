use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the dashboard binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file `{}`: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
