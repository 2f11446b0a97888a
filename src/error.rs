use std::path::PathBuf;
use thiserror::Error;

/// The only failure a scan reports to its caller.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory does not exist: {}", .0.display())]
    InvalidRoot(PathBuf),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
