//! Document content
//!
//! `ContentState` is an immutable, ordered list of blocks. Blocks are held
//! behind `Rc`, so deriving a new content value from an old one only
//! allocates the blocks that actually changed.

use std::rc::Rc;

use crate::errors::SelectionError;

use super::block::Block;
use super::key::generate_key;
use super::selection::SelectionState;
use super::style::BlockType;

/// The document: blocks plus the selections around the edit that produced it
#[derive(Clone, Debug, PartialEq)]
pub struct ContentState {
    blocks: Vec<Rc<Block>>,
    selection_before: SelectionState,
    selection_after: SelectionState,
}

impl ContentState {
    /// A document holding one empty unstyled block
    pub fn create_empty() -> Self {
        let key = generate_key(|_| false);
        ContentState::from_blocks(vec![Block::empty(key, BlockType::Unstyled)])
    }

    /// Build a document from blocks with the caret at the start
    ///
    /// An empty list yields an empty document. Keys must be unique.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            return ContentState::create_empty();
        }
        let caret = SelectionState::collapsed(blocks[0].key(), 0);
        Self {
            blocks: blocks.into_iter().map(Rc::new).collect(),
            selection_before: caret.clone(),
            selection_after: caret,
        }
    }

    pub fn blocks(&self) -> &[Rc<Block>] {
        &self.blocks
    }

    pub fn block_for_key(&self, key: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.key() == key).map(|b| b.as_ref())
    }

    pub fn block_index(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.key() == key)
    }

    pub fn block_before(&self, key: &str) -> Option<&Block> {
        let index = self.block_index(key)?;
        index.checked_sub(1).map(|i| self.blocks[i].as_ref())
    }

    pub fn block_after(&self, key: &str) -> Option<&Block> {
        let index = self.block_index(key)?;
        self.blocks.get(index + 1).map(|b| b.as_ref())
    }

    pub fn first_block(&self) -> &Block {
        &self.blocks[0]
    }

    pub fn last_block(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn selection_before(&self) -> &SelectionState {
        &self.selection_before
    }

    pub fn selection_after(&self) -> &SelectionState {
        &self.selection_after
    }

    /// True if any block has text
    pub fn has_text(&self) -> bool {
        self.blocks.len() > 1 || !self.blocks[0].is_empty()
    }

    /// Block texts joined with newlines
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A fresh key unused by any block
    pub fn new_block_key(&self) -> String {
        generate_key(|k| self.block_for_key(k).is_some())
    }

    /// Replace blocks `start..=end` (by index) with `replacement`
    pub fn with_replaced_range(&self, start: usize, end: usize, replacement: Vec<Block>) -> ContentState {
        let mut blocks = Vec::with_capacity(self.blocks.len() + replacement.len());
        blocks.extend(self.blocks[..start].iter().cloned());
        blocks.extend(replacement.into_iter().map(Rc::new));
        blocks.extend(self.blocks[end + 1..].iter().cloned());
        ContentState {
            blocks,
            ..self.clone()
        }
    }

    /// Replace the block at `index`
    pub fn with_block(&self, index: usize, block: Block) -> ContentState {
        self.with_replaced_range(index, index, vec![block])
    }

    pub fn with_selection_before(&self, selection: SelectionState) -> ContentState {
        ContentState {
            selection_before: selection,
            ..self.clone()
        }
    }

    pub fn with_selection_after(&self, selection: SelectionState) -> ContentState {
        ContentState {
            selection_after: selection,
            ..self.clone()
        }
    }

    /// Check that a selection addresses this document, fixing its direction
    pub fn validate_selection(&self, selection: &SelectionState) -> Result<SelectionState, SelectionError> {
        let anchor_index = self.checked_position(&selection.anchor_key, selection.anchor_offset)?;
        let focus_index = self.checked_position(&selection.focus_key, selection.focus_offset)?;

        let is_backward = focus_index < anchor_index
            || (focus_index == anchor_index && selection.focus_offset < selection.anchor_offset);

        Ok(SelectionState {
            is_backward,
            ..selection.clone()
        })
    }

    fn checked_position(&self, key: &str, offset: usize) -> Result<usize, SelectionError> {
        let index = self
            .block_index(key)
            .ok_or_else(|| SelectionError::UnknownBlock(key.to_string()))?;
        let len = self.blocks[index].len();
        if offset > len {
            return Err(SelectionError::OffsetOutOfRange {
                key: key.to_string(),
                offset,
                len,
            });
        }
        Ok(index)
    }

    /// True if both documents share every block allocation
    pub fn shares_blocks_with(&self, other: &ContentState) -> bool {
        self.blocks.len() == other.blocks.len()
            && self
                .blocks
                .iter()
                .zip(other.blocks.iter())
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}
