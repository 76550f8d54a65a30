// core/src/errors/remote_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("unexpected status: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("transport error")]
    Transport(#[source] anyhow::Error),

    #[error("decode/serde error")]
    Decode(#[source] anyhow::Error),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
