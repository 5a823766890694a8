//! Block transformations: split and retype

use crate::models::{BlockType, ContentState, SelectionState};

use super::text::remove_range;

/// Split the block at the selection into two blocks
///
/// A non-collapsed selection is removed first. The new block keeps the
/// original type and receives a fresh key; the caret moves to its start.
pub fn split_block(content: &ContentState, selection: &SelectionState) -> ContentState {
    let content = if selection.is_collapsed() {
        content.clone()
    } else {
        remove_range(content, selection)
    };

    let key = selection.start_key();
    let offset = selection.start_offset();
    let Some(index) = content.block_index(key) else {
        log::warn!("split_block: no block with key '{}'", key);
        return content;
    };

    let new_key = content.new_block_key();
    let (head, tail) = content.blocks()[index].split_at(offset, new_key.clone());
    let caret = SelectionState::collapsed(new_key, 0).with_focus(selection.has_focus);

    content
        .with_replaced_range(index, index, vec![head, tail])
        .with_selection_after(caret)
}

/// Set the type of every block the selection touches
pub fn set_block_type(content: &ContentState, selection: &SelectionState, block_type: BlockType) -> ContentState {
    let (Some(start_index), Some(end_index)) = (
        content.block_index(selection.start_key()),
        content.block_index(selection.end_key()),
    ) else {
        log::warn!("set_block_type: selection does not address the document");
        return content.clone();
    };

    let retyped = content.blocks()[start_index..=end_index]
        .iter()
        .map(|b| b.with_type(block_type))
        .collect();

    content
        .with_replaced_range(start_index, end_index, retyped)
        .with_selection_after(selection.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Block;

    #[test]
    fn test_split_middle() {
        let content = ContentState::from_blocks(vec![Block::new("a", "hello world").with_type(BlockType::HeaderOne)]);
        let result = split_block(&content, &SelectionState::collapsed("a", 5));

        assert_eq!(result.blocks().len(), 2);
        assert_eq!(result.blocks()[0].text(), "hello");
        assert_eq!(result.blocks()[1].text(), " world");
        assert_eq!(result.blocks()[1].block_type(), BlockType::HeaderOne);

        let new_key = result.blocks()[1].key().to_string();
        assert_ne!(new_key, "a");
        assert_eq!(result.selection_after(), &SelectionState::collapsed(new_key, 0));
    }

    #[test]
    fn test_split_removes_selection_first() {
        let content = ContentState::from_blocks(vec![Block::new("a", "abcdef")]);
        let result = split_block(&content, &SelectionState::range("a", 2, 4));

        assert_eq!(result.blocks()[0].text(), "ab");
        assert_eq!(result.blocks()[1].text(), "ef");
    }

    #[test]
    fn test_set_block_type_range() {
        let content = ContentState::from_blocks(vec![
            Block::new("a", "one"),
            Block::new("b", "two"),
            Block::new("c", "three"),
        ]);
        let selection = SelectionState {
            anchor_key: "a".to_string(),
            anchor_offset: 1,
            focus_key: "b".to_string(),
            focus_offset: 1,
            is_backward: false,
            has_focus: false,
        };
        let result = set_block_type(&content, &selection, BlockType::HeaderOne);

        assert_eq!(result.blocks()[0].block_type(), BlockType::HeaderOne);
        assert_eq!(result.blocks()[1].block_type(), BlockType::HeaderOne);
        assert_eq!(result.blocks()[2].block_type(), BlockType::Unstyled);
    }
}
