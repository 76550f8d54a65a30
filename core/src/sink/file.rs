use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::r#trait::ResultsSink;
use crate::errors::PersistError;
use crate::mapping::ResultsDocument;

/// Appends each document to `results<unix-millis>.json` under a directory
/// that is created on first use.
#[derive(Debug, Clone)]
pub struct FileResultsSink {
    dir: PathBuf,
}

impl FileResultsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self) -> PathBuf {
        let stamp = chrono::Utc::now().timestamp_millis();
        self.dir.join(format!("results{stamp}.json"))
    }
}

#[async_trait]
impl ResultsSink for FileResultsSink {
    async fn persist(&self, doc: &ResultsDocument) -> Result<PathBuf, PersistError> {
        let body = serde_json::to_vec(doc).map_err(PersistError::Encode)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PersistError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.file_path();
        let write_err = |source| PersistError::Write {
            path: path.clone(),
            source,
        };

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(write_err)?;
        file.write_all(&body).await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;

        tracing::debug!(
            target: "railsync.sink",
            path = %path.display(),
            bytes = body.len(),
            records = doc.results.len(),
            "results written"
        );
        Ok(path)
    }
}
