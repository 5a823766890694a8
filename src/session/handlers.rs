//! Input handlers
//!
//! Pure functions from the current editor state and one input event to the
//! next state. The session applies their results; tests call them directly.

use serde::{Deserialize, Serialize};

use crate::commands;
use crate::errors::SelectionError;
use crate::models::{BlockType, EditorState, SelectionState, StyleSet};
use crate::transform;
use crate::triggers::{self, Action, Format};
use crate::undo::ChangeType;

/// Whether a handler consumed the event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HandleValue {
    Handled,
    NotHandled,
}

impl HandleValue {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleValue::Handled => "handled",
            HandleValue::NotHandled => "not-handled",
        }
    }

    pub fn is_handled(self) -> bool {
        self == HandleValue::Handled
    }
}

/// Result of offering a pending input to the trigger rules
#[derive(Clone, Debug)]
pub struct BeforeInputOutcome {
    pub action: Action,
    /// Next state when the input was consumed
    pub state: Option<EditorState>,
}

impl BeforeInputOutcome {
    pub fn handle_value(&self) -> HandleValue {
        if self.state.is_some() {
            HandleValue::Handled
        } else {
            HandleValue::NotHandled
        }
    }
}

/// Offer `input` to the trigger rules before it is inserted
///
/// On a match the trigger text is removed and the format applied as one
/// undo step, and the input itself is swallowed.
pub fn handle_before_input(input: &str, state: &EditorState) -> BeforeInputOutcome {
    let selection = state.selection();
    let content = state.current_content();
    let key = selection.start_key();

    let Some(block) = content.block_for_key(key) else {
        return BeforeInputOutcome { action: Action::NoAction, state: None };
    };

    let action = triggers::decide(block.text(), input);
    let Some(format) = action.format() else {
        return BeforeInputOutcome { action, state: None };
    };
    log::debug!("trigger {:?} in block '{}'", action, key);

    let trigger = SelectionState::range(key, 0, action.trigger_len()).with_focus(selection.has_focus);
    let removed = transform::remove_range(content, &trigger);

    let next = match format {
        Format::Block(block_type) => {
            let caret = removed.selection_after().clone();
            let retyped = transform::set_block_type(&removed, &caret, block_type);
            state.push(retyped, ChangeType::ApplyTrigger)
        }
        Format::Inline(style) => {
            let pushed = state.push(removed, ChangeType::ApplyTrigger);
            commands::apply_fresh_inline_style(&pushed, style)
        }
    };

    BeforeInputOutcome {
        action,
        state: Some(next),
    }
}

/// Default insertion: replace the selection with `text`
///
/// Inserted chars take the current inline style. Line breaks in `text`
/// split blocks. The whole insertion is one change.
pub fn handle_insert_text(text: &str, state: &EditorState) -> EditorState {
    if text.is_empty() {
        return state.clone();
    }

    let style = state.current_inline_style();
    let normalized = text.replace("\r\n", "\n");
    let mut lines = normalized.split('\n');
    let first = lines.next().unwrap_or_default();

    let mut content = transform::replace_text(state.current_content(), state.selection(), first, style);
    for line in lines {
        let caret = content.selection_after().clone();
        content = transform::split_block(&content, &caret);
        let caret = content.selection_after().clone();
        content = transform::insert_text(&content, &caret, line, style);
    }

    state.push(content, ChangeType::InsertCharacters)
}

/// Split the block at the selection
///
/// The new block is always unstyled and the inline style override is
/// cleared, so nothing carries over into the next paragraph.
pub fn handle_return(state: &EditorState) -> EditorState {
    let split = transform::split_block(state.current_content(), state.selection());
    let caret = split.selection_after().clone();
    let content = transform::set_block_type(&split, &caret, BlockType::Unstyled);

    state
        .push(content, ChangeType::SplitBlock)
        .set_inline_style_override(Some(StyleSet::EMPTY))
}

/// Run a named command from the default table
pub fn handle_key_command(command: &str, state: &EditorState) -> Option<EditorState> {
    commands::handle_key_command(state, command)
}

/// Adopt a selection reported by the rendering surface
///
/// An unchanged range keeps the inline style override; a moved caret
/// clears it.
pub fn handle_select(selection: &SelectionState, state: &EditorState) -> Result<EditorState, SelectionError> {
    let checked = state.current_content().validate_selection(selection)?;
    if checked.same_range(state.selection()) {
        if checked.has_focus == state.selection().has_focus {
            return Ok(state.clone());
        }
        let override_styles = state.inline_style_override();
        return Ok(state.force_selection(checked).set_inline_style_override(override_styles));
    }
    Ok(state.force_selection(checked))
}
