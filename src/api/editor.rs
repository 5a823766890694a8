//! Browser-facing editor class
//!
//! `RichTextEditor` is what the page shell instantiates. It wires an
//! `EditorSession` to `window.localStorage` and `window.alert`, and exposes
//! the event handlers the contenteditable surface calls.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use crate::commands::{default_key_binding, KeyEvent};
use crate::config::EditorConfig;
use crate::models::SelectionState;
use crate::persistence::{self, LocalStore};
use crate::renderers::{build_display_list, StyleMap};
use crate::session::{EditorSession, Notice, Notifier};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Shows notices with `window.alert`
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Saved(_) => wasm_info!("{}", notice.message()),
            Notice::SaveFailed(_) => wasm_warn!("{}", notice.message()),
        }
        let shown = web_sys::window().map(|w| w.alert_with_message(notice.message()));
        if !matches!(shown, Some(Ok(()))) {
            wasm_warn!("Could not show notice: {}", notice.message());
        }
    }
}

/// One mounted rich text editor
#[wasm_bindgen]
pub struct RichTextEditor {
    session: EditorSession,
    style_map: StyleMap,
}

#[wasm_bindgen]
impl RichTextEditor {
    /// Mount an editor, restoring saved content from localStorage
    ///
    /// `config` is an optional object; see `EditorConfig` for its fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RichTextEditor, JsValue> {
        let config: EditorConfig = deserialize_or_default(config, "Invalid editor config")?;
        wasm_info!("RichTextEditor mounting (storage key '{}')", config.storage_key);

        let session = EditorSession::new(Box::new(LocalStore::new()), Box::new(AlertNotifier), config);
        wasm_info!(
            "RichTextEditor ready: {} blocks",
            session.state().current_content().blocks().len()
        );

        Ok(RichTextEditor {
            session,
            style_map: StyleMap::default(),
        })
    }

    /// Offer typed input to the shortcut triggers
    ///
    /// Returns "handled" when the input was consumed; on "not-handled" the
    /// surface inserts it through `insertText`.
    #[wasm_bindgen(js_name = handleBeforeInput)]
    pub fn handle_before_input(&mut self, input: &str) -> String {
        let (action, value) = self.session.on_before_input(input);
        if value.is_handled() {
            wasm_log!("handleBeforeInput: {:?}", action);
        }
        value.as_str().to_string()
    }

    /// Insert text at the selection with the current inline style
    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&mut self, text: &str) {
        self.session.insert_text(text);
    }

    /// Split the current block; always "handled"
    #[wasm_bindgen(js_name = handleReturn)]
    pub fn handle_return(&mut self) -> String {
        self.session.on_return().as_str().to_string()
    }

    /// Run a named editing command ("bold", "undo", ...)
    #[wasm_bindgen(js_name = handleKeyCommand)]
    pub fn handle_key_command(&mut self, command: &str) -> String {
        let value = self.session.on_key_command(command);
        wasm_log!("handleKeyCommand '{}': {}", command, value.as_str());
        value.as_str().to_string()
    }

    /// Command name bound to a keyboard event, or undefined
    ///
    /// Accepts a DOM `KeyboardEvent` or any object with the same fields.
    #[wasm_bindgen(js_name = keyBindingFn)]
    pub fn key_binding_fn(&self, event: JsValue) -> Result<Option<String>, JsValue> {
        let event = read_key_event(&event)?;
        Ok(default_key_binding(&event).map(|command| command.name().to_string()))
    }

    /// Report the DOM selection
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, selection: JsValue) -> Result<(), JsValue> {
        let selection: SelectionState = deserialize(selection, "Invalid selection")?;
        self.session.set_selection(&selection).map_err(to_js_error)
    }

    /// Save to localStorage; the user is notified either way
    pub fn save(&self) -> bool {
        self.session.save().is_ok()
    }

    /// Everything the surface needs to redraw
    #[wasm_bindgen(js_name = getDisplayList)]
    pub fn get_display_list(&self) -> Result<JsValue, JsValue> {
        let list = build_display_list(self.session.state(), &self.style_map, &self.session.config().placeholder);
        serialize(&list, "Failed to serialize display list")
    }

    /// The document as snapshot JSON
    #[wasm_bindgen(js_name = getRawContent)]
    pub fn get_raw_content(&self) -> Result<String, JsValue> {
        persistence::serialize(self.session.state().current_content()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = getPlainText)]
    pub fn get_plain_text(&self) -> String {
        self.session.state().current_content().plain_text()
    }

    /// The inline style map, for building a stylesheet
    #[wasm_bindgen(js_name = getStyleMap)]
    pub fn get_style_map(&self) -> Result<JsValue, JsValue> {
        serialize(&self.style_map, "Failed to serialize style map")
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.state().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.state().can_redo()
    }
}

/// Read the fields the bindings use
///
/// Event fields are prototype getters, so they are read one by one rather
/// than deserialized.
fn read_key_event(event: &JsValue) -> Result<KeyEvent, JsValue> {
    let key = js_sys::Reflect::get(event, &JsValue::from_str("key"))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("Invalid key event: missing 'key'"))?;
    let flag = |name: &str| -> Result<bool, JsValue> {
        Ok(js_sys::Reflect::get(event, &JsValue::from_str(name))?.is_truthy())
    };

    Ok(KeyEvent {
        key,
        ctrl_key: flag("ctrlKey")?,
        meta_key: flag("metaKey")?,
        alt_key: flag("altKey")?,
        shift_key: flag("shiftKey")?,
    })
}

/// Focus the editable root matched by `selector`
///
/// Click-to-focus belongs to the surface; this is the capability it calls.
/// Returns false when nothing matches.
#[wasm_bindgen(js_name = focusEditorRoot)]
pub fn focus_editor_root(selector: &str) -> Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let Some(element) = document.query_selector(selector)? else {
        return Ok(false);
    };
    let element: HtmlElement = element
        .dyn_into()
        .map_err(|_| JsValue::from_str("Editor root is not an HTML element"))?;
    element.focus()?;
    Ok(true)
}
