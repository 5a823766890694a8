//! Snapshot persistence
//!
//! Documents are saved as raw JSON under a single fixed key. Loading never
//! fails: an absent or malformed snapshot yields an empty document.

pub mod local;
pub mod raw;
pub mod store;

use crate::errors::EditorError;
use crate::models::ContentState;

pub use local::LocalStore;
pub use raw::{convert_from_raw, convert_to_raw, deserialize, serialize, RawBlock, RawContent, RawStyleRange};
pub use store::{KeyValueStore, MemoryStore};

/// Key the editor's snapshot is stored under
pub const STORAGE_KEY: &str = "editorContent";

/// Write `content` to `store` under `key`
pub fn save_snapshot(store: &dyn KeyValueStore, key: &str, content: &ContentState) -> Result<(), EditorError> {
    let json = serialize(content)?;
    store.set(key, &json)?;
    log::info!("saved snapshot '{}' ({} bytes)", key, json.len());
    Ok(())
}

/// Read the snapshot under `key`, or `None` when absent or unusable
pub fn load_snapshot(store: &dyn KeyValueStore, key: &str) -> Option<ContentState> {
    let json = match store.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            log::debug!("no snapshot under '{}'", key);
            return None;
        }
        Err(e) => {
            log::warn!("could not read snapshot '{}': {}", key, e);
            return None;
        }
    };

    match deserialize(&json) {
        Ok(content) => {
            log::info!("restored snapshot '{}' ({} blocks)", key, content.blocks().len());
            Some(content)
        }
        Err(e) => {
            log::warn!("discarding malformed snapshot '{}': {}", key, e);
            None
        }
    }
}
