//! Renderers module for the Rich Text Editor
//!
//! Turns editor state into the display list the JavaScript surface draws,
//! using an injected inline style map.

pub mod display_list;
pub mod style_map;

// Re-export commonly used types
pub use display_list::{build_display_list, render_block, DisplayList, RenderBlock, RenderRun};
pub use style_map::{StyleDefinition, StyleMap};
