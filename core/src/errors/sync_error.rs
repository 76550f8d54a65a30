// core/src/errors/sync_error.rs
use std::fmt;

use thiserror::Error;

use super::{ConfigError, MappingError, PersistError, RemoteError};

/// Remote call that was in flight when a [`SyncError::Remote`] happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStep {
    CreateRun,
    ListCases,
    SubmitResults,
}

impl fmt::Display for RemoteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemoteStep::CreateRun => "create run",
            RemoteStep::ListCases => "list cases",
            RemoteStep::SubmitResults => "submit results",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unable to {step}: {source}")]
    Remote {
        step: RemoteStep,
        #[source]
        source: RemoteError,
    },

    #[error("unable to build http client: {0}")]
    ClientSetup(#[source] RemoteError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("persist error: {0}")]
    Persist(#[from] PersistError),

    #[error("workflow already completed")]
    AlreadyCompleted,

    #[error("event stream ended before the run ended")]
    NoRunEnded,
}

impl SyncError {
    pub fn remote(step: RemoteStep, source: RemoteError) -> Self {
        SyncError::Remote { step, source }
    }

    /// Process exit status the embedding host should report for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
