//! Error types for the editor
//!
//! Snapshot and storage errors never abort an editing session: load falls
//! back to an empty document and save failures become user notices.

use thiserror::Error;

/// Top-level editor error type
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),
}

/// A persisted snapshot could not be encoded or decoded
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// Not valid JSON, or JSON of the wrong shape
    #[error("Malformed snapshot JSON: {0}")]
    Json(String),

    #[error("Snapshot contains no blocks")]
    NoBlocks,

    #[error("Duplicate block key '{0}'")]
    DuplicateKey(String),

    #[error("Unknown block type '{block_type}' in block '{key}'")]
    UnknownBlockType { key: String, block_type: String },

    #[error("Unknown inline style '{style}' in block '{key}'")]
    UnknownStyle { key: String, style: String },

    #[error("Style range {offset}+{length} exceeds length {len} of block '{key}'")]
    RangeOutOfBounds {
        key: String,
        offset: usize,
        length: usize,
        len: usize,
    },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err.to_string())
    }
}

/// The key-value store rejected a read or write
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// No storage backend (e.g. private browsing, no window)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The write was rejected, typically quota exceeded
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),
}

/// A selection does not address the current document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No block with key '{0}'")]
    UnknownBlock(String),

    #[error("Offset {offset} out of range for block '{key}' (length {len})")]
    OffsetOutOfRange { key: String, offset: usize, len: usize },
}
