//! File-backed talker collection.
//!
//! The whole collection lives in one JSON array on disk. Every operation
//! re-reads the file; nothing is cached between requests. Mutations go
//! through [`TalkerStore::modify`], which holds a write lock across
//! load → change → save so two requests on the same store cannot lose each
//! other's updates.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::Talker;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid talker document: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize talkers: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct TalkerStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TalkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }

    /// Read and parse the whole collection. A missing file is an error, not an empty list.
    pub async fn load(&self) -> Result<Vec<Talker>, StoreError> {
        let data = fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!("Failed to read {}: {}", self.path.display(), e);
            self.io_error(e)
        })?;

        serde_json::from_str(&data).map_err(|source| {
            tracing::error!("Failed to parse {}: {}", self.path.display(), source);
            StoreError::Parse { path: self.path.clone(), source }
        })
    }

    /// Overwrite the file with `talkers`, pretty-printed with two-space indentation.
    ///
    /// Writes a sibling temp file and renames it into place, so readers see
    /// either the old document or the new one.
    pub async fn save(&self, talkers: &[Talker]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(talkers)?;

        let temp_path = self.path.with_extension("json.tmp");
        let write = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(data.as_bytes()).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, &self.path).await
        };

        write.await.map_err(|e| {
            tracing::error!("Failed to save {}: {}", self.path.display(), e);
            self.io_error(e)
        })
    }

    /// Load, apply `change`, save, all under the store's write lock.
    ///
    /// `change` returns `(value, dirty)`; the file is only rewritten when
    /// `dirty` is true.
    pub async fn modify<R, F>(&self, change: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<Talker>) -> (R, bool),
    {
        let _guard = self.write_lock.lock().await;

        let mut talkers = self.load().await?;
        let (result, dirty) = change(&mut talkers);
        if dirty {
            self.save(&talkers).await?;
        }
        Ok(result)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Talker>, StoreError> {
        Ok(self.load().await?.into_iter().find(|t| t.id == id))
    }

    /// Number of stored talkers, or the reason the document is unreadable
    pub async fn health(&self) -> Result<usize, StoreError> {
        Ok(self.load().await?.len())
    }
}

/// Id for a new talker: one past the largest id in use.
///
/// Unlike `len + 1` this never hands out an id that is still present after
/// a deletion in the middle of the collection.
pub fn next_id(talkers: &[Talker]) -> i64 {
    talkers.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
