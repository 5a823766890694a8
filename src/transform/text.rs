//! Text transformations: insert, remove, replace

use crate::models::{ContentState, SelectionState, StyleSet};

/// Remove the selected range, merging the end block into the start block
///
/// The caret lands at the selection start. A collapsed selection returns
/// an equal document with the caret moved.
pub fn remove_range(content: &ContentState, selection: &SelectionState) -> ContentState {
    let (Some(start_index), Some(end_index)) = (
        content.block_index(selection.start_key()),
        content.block_index(selection.end_key()),
    ) else {
        log::warn!("remove_range: selection does not address the document");
        return content.clone();
    };

    let start_offset = selection.start_offset();
    let end_offset = selection.end_offset();
    let start_block = &content.blocks()[start_index];

    let merged = if start_index == end_index {
        start_block.splice(start_offset, end_offset, "", StyleSet::EMPTY)
    } else {
        let end_block = &content.blocks()[end_index];
        let head = start_block.splice(start_offset, start_block.len(), "", StyleSet::EMPTY);
        let tail = end_block.splice(0, end_offset, "", StyleSet::EMPTY);
        head.concat(&tail)
    };

    content
        .with_replaced_range(start_index, end_index, vec![merged])
        .with_selection_after(selection.collapse_to_start())
}

/// Insert `text` at a collapsed caret, each char styled `style`
pub fn insert_text(content: &ContentState, at: &SelectionState, text: &str, style: StyleSet) -> ContentState {
    let key = at.start_key();
    let offset = at.start_offset();
    let Some(index) = content.block_index(key) else {
        log::warn!("insert_text: no block with key '{}'", key);
        return content.clone();
    };

    let block = content.blocks()[index].splice(offset, offset, text, style);
    let caret = SelectionState::collapsed(key, offset + text.chars().count()).with_focus(at.has_focus);

    content.with_block(index, block).with_selection_after(caret)
}

/// Replace the selected range with `text`
pub fn replace_text(
    content: &ContentState,
    selection: &SelectionState,
    text: &str,
    style: StyleSet,
) -> ContentState {
    let removed = remove_range(content, selection);
    let caret = removed.selection_after().clone();
    insert_text(&removed, &caret, text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockType, InlineStyle};

    fn content() -> ContentState {
        ContentState::from_blocks(vec![
            Block::new("a", "hello").with_type(BlockType::HeaderOne),
            Block::new("b", "middle"),
            Block::new("c", "world"),
        ])
    }

    #[test]
    fn test_remove_within_block() {
        let result = remove_range(&content(), &SelectionState::range("a", 1, 4));
        assert_eq!(result.first_block().text(), "ho");
        assert_eq!(result.selection_after(), &SelectionState::collapsed("a", 1));
    }

    #[test]
    fn test_remove_across_blocks_keeps_start_block() {
        let selection = SelectionState {
            anchor_key: "a".to_string(),
            anchor_offset: 2,
            focus_key: "c".to_string(),
            focus_offset: 3,
            is_backward: false,
            has_focus: false,
        };
        let result = remove_range(&content(), &selection);

        assert_eq!(result.blocks().len(), 1);
        assert_eq!(result.first_block().text(), "held");
        assert_eq!(result.first_block().key(), "a");
        assert_eq!(result.first_block().block_type(), BlockType::HeaderOne);
    }

    #[test]
    fn test_replace_text_styles_insertion() {
        let bold = StyleSet::of(InlineStyle::Bold);
        let result = replace_text(&content(), &SelectionState::range("c", 0, 5), "earth", bold);

        let block = result.block_for_key("c").unwrap();
        assert_eq!(block.text(), "earth");
        assert_eq!(block.style_ranges().len(), 1);
        assert_eq!(result.selection_after(), &SelectionState::collapsed("c", 5));
    }

    #[test]
    fn test_insert_unknown_key_is_noop() {
        let original = content();
        let result = insert_text(&original, &SelectionState::collapsed("zz", 0), "x", StyleSet::EMPTY);
        assert_eq!(result, original);
    }
}
