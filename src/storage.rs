//! History persistence: write-through JSON snapshots of the round history.
//!
//! The engine only sees the [`HistoryStore`] trait; the concrete medium is
//! injected at startup. Every accepted round replaces the stored content
//! entirely (no incremental append format), and the stored history seeds
//! the pattern window and latest snapshot on restart.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::RoundRecord;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history io: {0}")]
    Io(#[from] std::io::Error),
    #[error("history decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Durable store for the bounded round history, newest last.
pub trait HistoryStore: Send + Sync {
    /// Load the persisted history. An absent store yields an empty history,
    /// not an error.
    fn load(&self) -> Result<Vec<RoundRecord>, StorageError>;

    /// Replace the persisted history with `history`.
    fn save(&self, history: &[RoundRecord]) -> Result<(), StorageError>;
}

/// Single-file JSON store, the original file-as-database layout.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<RoundRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, history: &[RoundRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
