use crate::models::ContentState;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;

/// Kind of edit that produced a content value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    InsertCharacters,
    BackspaceCharacter,
    DeleteCharacter,
    RemoveRange,
    SplitBlock,
    ChangeBlockType,
    ChangeInlineStyle,
    /// A shortcut trigger consumed its text and applied a format
    ApplyTrigger,
    Undo,
    Redo,
}

impl ChangeType {
    /// Changes that merge with an immediately preceding change of the same type
    fn coalesces(self) -> bool {
        matches!(
            self,
            ChangeType::InsertCharacters | ChangeType::BackspaceCharacter | ChangeType::DeleteCharacter
        )
    }
}

/// Undo/redo history of content roots
///
/// Each entry is a whole document value; blocks are shared between entries,
/// so an entry costs one pointer per block.
#[derive(Clone, Debug)]
pub struct UndoStack {
    /// Older content values, most recent at the back
    undo: VecDeque<Rc<ContentState>>,
    /// Undone content values, most recent at the back
    redo: Vec<Rc<ContentState>>,
    /// Maximum number of entries to keep in undo history
    max_size: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(100)
    }
}

impl UndoStack {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Determine if a change must start a new undo step
    ///
    /// Batching breaks on:
    /// - Different change types
    /// - Change types that never coalesce (splits, formatting, triggers)
    /// - Caret movement since the previous change
    pub fn should_break_batch(last: Option<ChangeType>, change: ChangeType, caret_moved: bool) -> bool {
        match last {
            None => true,
            Some(last) => last != change || !change.coalesces() || caret_moved,
        }
    }

    /// Push `previous` as a new undo step and drop redo history
    pub fn record(&mut self, previous: Rc<ContentState>) {
        self.redo.clear();
        self.undo.push_back(previous);
        if self.undo.len() > self.max_size {
            self.undo.pop_front();
        }
    }

    /// Continue the current undo step; a new edit still invalidates redo
    pub fn extend_batch(&mut self) {
        self.redo.clear();
    }

    /// Step back from `current`, returning the content to restore
    pub fn undo(&mut self, current: Rc<ContentState>) -> Option<Rc<ContentState>> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward from `current`, returning the content to restore
    pub fn redo(&mut self, current: Rc<ContentState>) -> Option<Rc<ContentState>> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
