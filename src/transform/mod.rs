//! Document transformations
//!
//! Pure functions from one `ContentState` to the next. Each records the
//! resulting caret in `selection_after`; pushing the result onto an
//! `EditorState` is the caller's job.

pub mod block;
pub mod style;
pub mod text;

pub use block::{set_block_type, split_block};
pub use style::{apply_inline_style, remove_inline_style, selection_has_style};
pub use text::{insert_text, remove_range, replace_text};
