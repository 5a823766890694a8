//! Rich Text Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros, serialization and error conversion
//! - `editor`: The `RichTextEditor` class and the focus capability

pub mod helpers;
pub mod editor;

pub use editor::{focus_editor_root, AlertNotifier, RichTextEditor};
