use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::PersistError;
use crate::mapping::ResultsDocument;

#[async_trait]
pub trait ResultsSink: Send + Sync {
    /// Writes one document and returns where it landed.
    async fn persist(&self, doc: &ResultsDocument) -> Result<PathBuf, PersistError>;
}
