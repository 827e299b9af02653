//! Persistent store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors a [`PersistentStore`](super::PersistentStore) can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of strings
    #[error("store contents could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refuses writes
    #[error("store is read-only")]
    ReadOnly,
}
