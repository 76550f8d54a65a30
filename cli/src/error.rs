use std::path::PathBuf;

use railsync_core::api::{ConfigError, SyncError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid event on line {line}")]
    Event {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid results file: {}", path.display())]
    Results {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to set up log directory: {}", path.display())]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
