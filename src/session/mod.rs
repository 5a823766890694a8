//! Editor session controller
//!
//! `EditorSession` owns the live editor state for one mounted editor. The
//! rendering surface forwards every input event here, one at a time, and
//! re-renders whenever an event reports `Handled`. Saving and loading go
//! through a key-value store; the outcome of a save is reported to the user
//! through a notifier.

pub mod handlers;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::models::{ContentState, EditorState, SelectionState};
use crate::persistence::{self, KeyValueStore};
use crate::triggers::Action;
use crate::undo::UndoStack;

pub use handlers::{
    handle_before_input, handle_insert_text, handle_key_command, handle_return, handle_select,
    BeforeInputOutcome, HandleValue,
};

/// A user-visible message
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum Notice {
    Saved(String),
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Saved(message) | Notice::SaveFailed(message) => message,
        }
    }
}

/// Shows notices to the user
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Saved(message) => log::info!("{}", message),
            Notice::SaveFailed(message) => log::error!("{}", message),
        }
    }
}

/// One mounted editor
pub struct EditorSession {
    state: EditorState,
    store: Box<dyn KeyValueStore>,
    notifier: Box<dyn Notifier>,
    config: EditorConfig,
}

impl EditorSession {
    /// Mount an editor, restoring the saved snapshot if there is one
    pub fn new(store: Box<dyn KeyValueStore>, notifier: Box<dyn Notifier>, config: EditorConfig) -> Self {
        let state = Self::load(store.as_ref(), &config);
        Self {
            state,
            store,
            notifier,
            config,
        }
    }

    /// Initial state from `store`: the snapshot, or an empty document
    pub fn load(store: &dyn KeyValueStore, config: &EditorConfig) -> EditorState {
        let content = persistence::load_snapshot(store, &config.storage_key).unwrap_or_else(ContentState::create_empty);
        EditorState::with_history(content, UndoStack::new(config.history_limit))
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the live state wholesale
    pub fn set_state(&mut self, state: EditorState) {
        self.state = state;
    }

    /// Offer a pending input to the trigger rules
    pub fn on_before_input(&mut self, input: &str) -> (Action, HandleValue) {
        let outcome = handle_before_input(input, &self.state);
        let value = outcome.handle_value();
        if let Some(next) = outcome.state {
            self.state = next;
        }
        (outcome.action, value)
    }

    /// Default insertion for input the triggers did not consume
    pub fn insert_text(&mut self, text: &str) {
        self.state = handle_insert_text(text, &self.state);
    }

    /// Split the current block; always handled
    pub fn on_return(&mut self) -> HandleValue {
        self.state = handle_return(&self.state);
        HandleValue::Handled
    }

    /// Run a named editing command
    pub fn on_key_command(&mut self, command: &str) -> HandleValue {
        match handle_key_command(command, &self.state) {
            Some(next) => {
                self.state = next;
                HandleValue::Handled
            }
            None => HandleValue::NotHandled,
        }
    }

    /// Adopt the selection the surface reports
    pub fn set_selection(&mut self, selection: &SelectionState) -> Result<(), EditorError> {
        self.state = handle_select(selection, &self.state)?;
        Ok(())
    }

    /// Save the document and tell the user how it went
    ///
    /// A failure leaves the in-memory document as it is.
    pub fn save(&self) -> Result<(), EditorError> {
        let result = persistence::save_snapshot(
            self.store.as_ref(),
            &self.config.storage_key,
            self.state.current_content(),
        );

        let notice = match &result {
            Ok(()) => Notice::Saved(self.config.save_notice.clone()),
            Err(e) => {
                log::warn!("save failed: {}", e);
                Notice::SaveFailed(format!("{}: {}", self.config.save_failed_notice, e))
            }
        };
        self.notifier.notify(&notice);
        result
    }
}
