//! Named editing commands
//!
//! The default command table: formatting toggles, history, and the
//! deletion family. A command name the table does not know is reported as
//! not handled and leaves the state alone.

pub mod key_bindings;
pub mod removable_word;

use serde::{Deserialize, Serialize};

use crate::models::{BlockType, EditorState, InlineStyle, SelectionState, StyleSet};
use crate::transform;
use crate::undo::ChangeType;

pub use key_bindings::{default_key_binding, KeyEvent};

/// A command from the default table
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EditorCommand {
    Bold,
    Underline,
    Undo,
    Redo,
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
    Delete,
    DeleteWord,
}

impl EditorCommand {
    pub const ALL: [EditorCommand; 9] = [
        EditorCommand::Bold,
        EditorCommand::Underline,
        EditorCommand::Undo,
        EditorCommand::Redo,
        EditorCommand::Backspace,
        EditorCommand::BackspaceWord,
        EditorCommand::BackspaceToStartOfLine,
        EditorCommand::Delete,
        EditorCommand::DeleteWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EditorCommand::Bold => "bold",
            EditorCommand::Underline => "underline",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::Backspace => "backspace",
            EditorCommand::BackspaceWord => "backspace-word",
            EditorCommand::BackspaceToStartOfLine => "backspace-to-start-of-line",
            EditorCommand::Delete => "delete",
            EditorCommand::DeleteWord => "delete-word",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        EditorCommand::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Run a named command; `None` when the table does not know the name
pub fn handle_key_command(state: &EditorState, command: &str) -> Option<EditorState> {
    let Some(command) = EditorCommand::from_name(command) else {
        log::debug!("unhandled key command '{}'", command);
        return None;
    };
    Some(execute(state, command))
}

/// Run a command from the table
pub fn execute(state: &EditorState, command: EditorCommand) -> EditorState {
    match command {
        EditorCommand::Bold => toggle_inline_style(state, InlineStyle::Bold),
        EditorCommand::Underline => toggle_inline_style(state, InlineStyle::Underline),
        EditorCommand::Undo => state.undo().unwrap_or_else(|| state.clone()),
        EditorCommand::Redo => state.redo().unwrap_or_else(|| state.clone()),
        EditorCommand::Backspace => backspace(state),
        EditorCommand::BackspaceWord => backspace_by(state, |text| removable_word::backward_len(text).max(1)),
        EditorCommand::BackspaceToStartOfLine => backspace_by(state, |text| text.chars().count()),
        EditorCommand::Delete => delete(state),
        EditorCommand::DeleteWord => delete_word(state),
    }
}

/// Toggle an inline style
///
/// With a collapsed selection only the override for the next typed text
/// changes. Otherwise the style is removed from the selection when every
/// selected char has it, and applied to the selection when not.
pub fn toggle_inline_style(state: &EditorState, style: InlineStyle) -> EditorState {
    let selection = state.selection();
    if selection.is_collapsed() {
        let current = state.current_inline_style();
        return state.set_inline_style_override(Some(current.toggled(style)));
    }

    let content = state.current_content();
    let next = if transform::selection_has_style(content, selection, style) {
        transform::remove_inline_style(content, selection, style)
    } else {
        transform::apply_inline_style(content, selection, style)
    };
    state.push(next, ChangeType::ChangeInlineStyle)
}

/// Replace the override with exactly `style`
pub fn apply_fresh_inline_style(state: &EditorState, style: InlineStyle) -> EditorState {
    toggle_inline_style(&state.set_inline_style_override(Some(StyleSet::EMPTY)), style)
}

fn remove_selection(state: &EditorState) -> EditorState {
    let next = transform::remove_range(state.current_content(), state.selection());
    state.push(next, ChangeType::RemoveRange)
}

fn backspace(state: &EditorState) -> EditorState {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return remove_selection(state);
    }

    let content = state.current_content();
    let key = selection.start_key();
    let offset = selection.start_offset();
    let Some(block) = content.block_for_key(key) else {
        return state.clone();
    };

    if offset == 0 {
        // A styled block loses its type before it can merge
        if block.block_type() != BlockType::Unstyled {
            let next = transform::set_block_type(content, selection, BlockType::Unstyled);
            return state.push(next, ChangeType::ChangeBlockType);
        }
        return merge_with_previous(state);
    }

    let range = SelectionState::range(key, offset - 1, offset);
    let next = transform::remove_range(content, &range);
    state.push(next, ChangeType::BackspaceCharacter)
}

/// Remove `count(text before caret)` chars behind a collapsed caret
fn backspace_by(state: &EditorState, count: impl Fn(&str) -> usize) -> EditorState {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return remove_selection(state);
    }

    let content = state.current_content();
    let key = selection.start_key();
    let offset = selection.start_offset();
    let Some(block) = content.block_for_key(key) else {
        return state.clone();
    };
    if offset == 0 {
        return merge_with_previous(state);
    }

    let n = count(block.slice(0, offset)).min(offset);
    let next = transform::remove_range(content, &SelectionState::range(key, offset - n, offset));
    state.push(next, ChangeType::RemoveRange)
}

fn merge_with_previous(state: &EditorState) -> EditorState {
    let content = state.current_content();
    let key = state.selection().start_key();
    let Some(previous) = content.block_before(key) else {
        return state.clone();
    };
    let range = SelectionState::between(previous.key(), previous.len(), key, 0);
    let next = transform::remove_range(content, &range);
    state.push(next, ChangeType::BackspaceCharacter)
}

fn merge_with_next(state: &EditorState) -> EditorState {
    let content = state.current_content();
    let key = state.selection().start_key();
    let (Some(block), Some(next_block)) = (content.block_for_key(key), content.block_after(key)) else {
        return state.clone();
    };
    let range = SelectionState::between(key, block.len(), next_block.key(), 0);
    let next = transform::remove_range(content, &range);
    state.push(next, ChangeType::DeleteCharacter)
}

fn delete(state: &EditorState) -> EditorState {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return remove_selection(state);
    }

    let content = state.current_content();
    let key = selection.start_key();
    let offset = selection.start_offset();
    let Some(block) = content.block_for_key(key) else {
        return state.clone();
    };
    if offset >= block.len() {
        return merge_with_next(state);
    }

    let next = transform::remove_range(content, &SelectionState::range(key, offset, offset + 1));
    state.push(next, ChangeType::DeleteCharacter)
}

fn delete_word(state: &EditorState) -> EditorState {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return remove_selection(state);
    }

    let content = state.current_content();
    let key = selection.start_key();
    let offset = selection.start_offset();
    let Some(block) = content.block_for_key(key) else {
        return state.clone();
    };
    if offset >= block.len() {
        return merge_with_next(state);
    }

    let n = removable_word::forward_len(block.slice(offset, block.len())).max(1);
    let next = transform::remove_range(content, &SelectionState::range(key, offset, offset + n));
    state.push(next, ChangeType::RemoveRange)
}
