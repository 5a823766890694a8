//! Editor state management
//!
//! `EditorState` is the complete state of one editing session: the current
//! document, the selection, the inline style override and the undo history.
//! It is a value: every transition returns a new state and leaves the old
//! one intact.

use std::rc::Rc;

use super::content::ContentState;
use super::selection::SelectionState;
use super::style::StyleSet;
use crate::undo::{ChangeType, UndoStack};

/// Complete editor state
#[derive(Clone, Debug)]
pub struct EditorState {
    /// The document being edited
    current_content: Rc<ContentState>,

    /// Current selection
    selection: SelectionState,

    /// Styles applied to the next inserted characters, if forced
    inline_style_override: Option<StyleSet>,

    /// Change that produced `current_content`
    last_change_type: Option<ChangeType>,

    history: UndoStack,
}

impl EditorState {
    /// State holding an empty document
    pub fn create_empty() -> Self {
        Self::create_with_content(ContentState::create_empty())
    }

    /// State holding `content`, caret at the start of the first block
    pub fn create_with_content(content: ContentState) -> Self {
        Self::with_history(content, UndoStack::default())
    }

    /// State holding `content` with a preconfigured history
    pub fn with_history(content: ContentState, history: UndoStack) -> Self {
        let selection = SelectionState::collapsed(content.first_block().key(), 0);
        let content = content
            .with_selection_before(selection.clone())
            .with_selection_after(selection.clone());
        Self {
            current_content: Rc::new(content),
            selection,
            inline_style_override: None,
            last_change_type: None,
            history,
        }
    }

    pub fn current_content(&self) -> &ContentState {
        &self.current_content
    }

    pub fn content_rc(&self) -> &Rc<ContentState> {
        &self.current_content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn inline_style_override(&self) -> Option<StyleSet> {
        self.inline_style_override
    }

    pub fn last_change_type(&self) -> Option<ChangeType> {
        self.last_change_type
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Adopt `content` as the result of an edit of kind `change`
    ///
    /// The caret moves to the content's `selection_after`. The inline style
    /// override is cleared.
    pub fn push(&self, content: ContentState, change: ChangeType) -> EditorState {
        let caret_moved = !self.selection.same_range(self.current_content.selection_after());
        let mut history = self.history.clone();

        let content = if UndoStack::should_break_batch(self.last_change_type, change, caret_moved) {
            history.record(Rc::clone(&self.current_content));
            content.with_selection_before(self.selection.clone())
        } else {
            history.extend_batch();
            content.with_selection_before(self.current_content.selection_before().clone())
        };

        let selection = content.selection_after().with_focus(self.selection.has_focus);
        log::debug!("push {:?}: {} blocks", change, content.blocks().len());

        EditorState {
            current_content: Rc::new(content),
            selection,
            inline_style_override: None,
            last_change_type: Some(change),
            history,
        }
    }

    /// Move the selection without editing; clears the inline style override
    pub fn force_selection(&self, selection: SelectionState) -> EditorState {
        EditorState {
            selection,
            inline_style_override: None,
            ..self.clone()
        }
    }

    pub fn set_inline_style_override(&self, styles: Option<StyleSet>) -> EditorState {
        EditorState {
            inline_style_override: styles,
            ..self.clone()
        }
    }

    /// Styles the next inserted characters receive
    ///
    /// The override wins when set. A collapsed caret takes the style of the
    /// char before it, or of the first char at a block start, looking into
    /// earlier blocks when the block is empty. A range takes the style of
    /// its first char.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(styles) = self.inline_style_override {
            return styles;
        }

        let content = &self.current_content;
        let key = self.selection.start_key();
        let offset = self.selection.start_offset();
        let Some(block) = content.block_for_key(key) else {
            return StyleSet::EMPTY;
        };

        if self.selection.is_collapsed() {
            // Typed text continues the char before the caret
            if offset > 0 {
                return block.style_at(offset - 1);
            }
            if !block.is_empty() {
                return block.style_at(0);
            }
            return look_upward_for_style(content, key);
        }

        if offset < block.len() {
            return block.style_at(offset);
        }
        if offset > 0 {
            return block.style_at(offset - 1);
        }
        look_upward_for_style(content, key)
    }

    /// Restore the content before the last undo step
    pub fn undo(&self) -> Option<EditorState> {
        let mut history = self.history.clone();
        let previous = history.undo(Rc::clone(&self.current_content))?;
        let selection = self
            .current_content
            .selection_before()
            .with_focus(self.selection.has_focus);

        Some(EditorState {
            current_content: previous,
            selection,
            inline_style_override: None,
            last_change_type: Some(ChangeType::Undo),
            history,
        })
    }

    /// Re-apply the last undone step
    pub fn redo(&self) -> Option<EditorState> {
        let mut history = self.history.clone();
        let next = history.redo(Rc::clone(&self.current_content))?;
        let selection = next.selection_after().with_focus(self.selection.has_focus);

        Some(EditorState {
            current_content: next,
            selection,
            inline_style_override: None,
            last_change_type: Some(ChangeType::Redo),
            history,
        })
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::create_empty()
    }
}

fn look_upward_for_style(content: &ContentState, key: &str) -> StyleSet {
    let Some(index) = content.block_index(key) else {
        return StyleSet::EMPTY;
    };
    content.blocks()[..index]
        .iter()
        .rev()
        .find(|b| !b.is_empty())
        .map(|b| b.style_at(b.len() - 1))
        .unwrap_or_default()
}
