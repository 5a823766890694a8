//! Rich Text Editor WASM Module
//!
//! A single rich-text editing widget for the browser. Typing `#`, `*`, `**`
//! or `***` followed by a space in an empty block turns the block into a
//! heading or switches the following text to bold, red or underline. The
//! document is saved to and restored from localStorage.

pub mod api;
pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod renderers;
pub mod session;
pub mod transform;
pub mod triggers;
pub mod undo;

// Re-export commonly used types
pub use config::EditorConfig;
pub use errors::{EditorError, SelectionError, SnapshotError, StorageError};
pub use models::{Block, BlockType, ContentState, EditorState, InlineStyle, SelectionState, StyleRange, StyleSet};
pub use session::{EditorSession, HandleValue, Notice, Notifier};
pub use triggers::{decide, Action};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Rich Text Editor WASM module initialized");
}
