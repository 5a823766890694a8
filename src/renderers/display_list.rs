//! Display List for block rendering
//!
//! This module defines the output structure handed to JavaScript after
//! every handled event. The display list carries each block's element tag
//! and its styled text runs, so the surface can rebuild the DOM without
//! knowing anything about inline style ranges.

use serde::Serialize;

use super::style_map::StyleMap;
use crate::models::{Block, BlockType, EditorState, SelectionState, StyleSet};

/// Top-level display list
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// All blocks in document order
    pub blocks: Vec<RenderBlock>,

    /// Placeholder to show, set only while the document is empty
    pub placeholder: Option<String>,

    /// Selection to restore in the DOM
    pub selection: SelectionState,

    /// Styles the next typed characters will get
    pub pending_styles: StyleSet,

    pub can_undo: bool,
    pub can_redo: bool,
}

/// A single block with its runs
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RenderBlock {
    /// Block key, used as the element's data-offset-key
    pub key: String,

    pub block_type: BlockType,

    /// HTML element name (`div`, `h1`)
    pub tag: &'static str,

    pub runs: Vec<RenderRun>,
}

/// A run of text with one style set
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderRun {
    pub text: String,

    /// Char offset of the run within its block
    pub offset: usize,

    pub styles: StyleSet,

    /// Inline CSS for `styles`
    pub css: String,
}

/// Build the display list for the current state
pub fn build_display_list(state: &EditorState, style_map: &StyleMap, placeholder: &str) -> DisplayList {
    let content = state.current_content();
    let blocks = content.blocks().iter().map(|b| render_block(b, style_map)).collect();

    let show_placeholder = !content.has_text() && content.first_block().block_type() == BlockType::Unstyled;

    DisplayList {
        blocks,
        placeholder: show_placeholder.then(|| placeholder.to_string()),
        selection: state.selection().clone(),
        pending_styles: state.current_inline_style(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
    }
}

/// Render one block as runs of equally styled text
pub fn render_block(block: &Block, style_map: &StyleMap) -> RenderBlock {
    let runs = block
        .style_runs()
        .into_iter()
        .map(|run| RenderRun {
            text: block.slice(run.start, run.end).to_string(),
            offset: run.start,
            styles: run.styles,
            css: style_map.css_for(run.styles),
        })
        .collect();

    RenderBlock {
        key: block.key().to_string(),
        block_type: block.block_type(),
        tag: block.block_type().html_tag(),
        runs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentState, InlineStyle};

    #[test]
    fn test_render_block_runs() {
        let block = Block::new("a", "plain bold")
            .with_type(BlockType::HeaderOne)
            .map_styles(6, 10, |s| s.with(InlineStyle::Bold));
        let rendered = render_block(&block, &StyleMap::default());

        assert_eq!(rendered.tag, "h1");
        assert_eq!(rendered.runs.len(), 2);
        assert_eq!(rendered.runs[0].text, "plain ");
        assert_eq!(rendered.runs[0].css, "");
        assert_eq!(rendered.runs[1].text, "bold");
        assert_eq!(rendered.runs[1].offset, 6);
        assert_eq!(rendered.runs[1].css, "font-weight: bold");
    }

    #[test]
    fn test_placeholder_only_when_empty() {
        let empty = EditorState::create_empty();
        let list = build_display_list(&empty, &StyleMap::default(), "Type here");
        assert_eq!(list.placeholder.as_deref(), Some("Type here"));
        assert!(list.blocks[0].runs.is_empty());

        let filled = EditorState::create_with_content(ContentState::from_blocks(vec![Block::new("a", "x")]));
        let list = build_display_list(&filled, &StyleMap::default(), "Type here");
        assert!(list.placeholder.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let state = EditorState::create_with_content(ContentState::from_blocks(vec![Block::new("a", "hi")]));
        let list = build_display_list(&state, &StyleMap::default(), "");
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["blocks"][0]["blockType"], "unstyled");
        assert_eq!(json["blocks"][0]["runs"][0]["text"], "hi");
        assert_eq!(json["selection"]["anchorKey"], "a");
        assert_eq!(json["canUndo"], false);
    }
}
