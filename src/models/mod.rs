//! Models module for the Rich Text Editor
//!
//! This module contains the immutable document model: blocks, content,
//! selection and the editor state that ties them together.

pub mod block;
pub mod content;
pub mod editor_state;
pub mod key;
pub mod selection;
pub mod style;

// Re-export commonly used types
pub use block::{Block, StyleRange, StyleRun};
pub use content::ContentState;
pub use editor_state::EditorState;
pub use selection::SelectionState;
pub use style::{BlockType, InlineStyle, StyleSet};
