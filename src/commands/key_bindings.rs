//! Default key bindings
//!
//! Maps a keyboard event, as reported by the browser, to the name of an
//! editing command. Either Ctrl or Meta acts as the command modifier.

use serde::{Deserialize, Serialize};

use super::EditorCommand;

/// The parts of a browser `KeyboardEvent` the bindings look at
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl_key || self.meta_key
    }
}

/// Command bound to `event`, if any
pub fn default_key_binding(event: &KeyEvent) -> Option<EditorCommand> {
    let key = event.key.to_ascii_lowercase();

    match key.as_str() {
        "b" if event.has_command_modifier() => Some(EditorCommand::Bold),
        "u" if event.has_command_modifier() => Some(EditorCommand::Underline),
        "z" if event.has_command_modifier() && event.shift_key => Some(EditorCommand::Redo),
        "z" if event.has_command_modifier() => Some(EditorCommand::Undo),
        "y" if event.ctrl_key => Some(EditorCommand::Redo),
        "backspace" if event.meta_key => Some(EditorCommand::BackspaceToStartOfLine),
        "backspace" if event.alt_key || event.ctrl_key => Some(EditorCommand::BackspaceWord),
        "backspace" => Some(EditorCommand::Backspace),
        "delete" if event.alt_key || event.ctrl_key => Some(EditorCommand::DeleteWord),
        "delete" => Some(EditorCommand::Delete),
        _ => None,
    }
}
