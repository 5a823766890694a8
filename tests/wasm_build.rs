//! WASM build test
//!
//! Exercises the browser-facing editor and localStorage in a real browser.

#![cfg(target_arch = "wasm32")]

use richtext_editor_wasm::api::RichTextEditor;
use richtext_editor_wasm::commands::KeyEvent;
use richtext_editor_wasm::persistence::{KeyValueStore, LocalStore};
use richtext_editor_wasm::{BlockType, EditorConfig, EditorSession, Notice, Notifier};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct Silent;

impl Notifier for Silent {
    fn notify(&self, _notice: &Notice) {}
}

fn config(storage_key: &str) -> EditorConfig {
    EditorConfig {
        storage_key: storage_key.to_string(),
        ..EditorConfig::default()
    }
}

#[wasm_bindgen_test]
fn test_editor_creation() {
    let editor = RichTextEditor::new(JsValue::UNDEFINED);
    assert!(editor.is_ok());
}

#[wasm_bindgen_test]
fn test_editor_with_config_object() {
    let value = serde_wasm_bindgen::to_value(&config("wasm-test-config")).unwrap();
    let editor = RichTextEditor::new(value).unwrap();
    assert!(!editor.can_undo());
}

#[wasm_bindgen_test]
fn test_before_input_trigger() {
    let value = serde_wasm_bindgen::to_value(&config("wasm-test-trigger")).unwrap();
    let mut editor = RichTextEditor::new(value).unwrap();

    assert_eq!(editor.handle_before_input("#"), "not-handled");
    editor.insert_text("#");
    assert_eq!(editor.handle_before_input(" "), "handled");
    assert_eq!(editor.get_plain_text(), "");

    let raw = editor.get_raw_content().unwrap();
    assert!(raw.contains("\"type\":\"header-one\""));
}

#[wasm_bindgen_test]
fn test_key_binding_fn() {
    let editor = RichTextEditor::new(JsValue::UNDEFINED).unwrap();

    let event = serde_wasm_bindgen::to_value(&KeyEvent::new("b").ctrl()).unwrap();
    assert_eq!(editor.key_binding_fn(event).unwrap(), Some("bold".to_string()));

    let event = serde_wasm_bindgen::to_value(&KeyEvent::new("b")).unwrap();
    assert_eq!(editor.key_binding_fn(event).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let key = "wasm-test-snapshot";
    let store = LocalStore::new();
    store.set(key, "").unwrap();

    let mut session = EditorSession::new(Box::new(LocalStore::new()), Box::new(Silent), config(key));
    session.insert_text("#");
    session.on_before_input(" ");
    session.insert_text("Saved");
    assert!(session.save().is_ok());
    assert!(store.get(key).unwrap().is_some());

    let restored = EditorSession::new(Box::new(LocalStore::new()), Box::new(Silent), config(key));
    let block = restored.state().current_content().first_block();
    assert_eq!(block.text(), "Saved");
    assert_eq!(block.block_type(), BlockType::HeaderOne);
}

#[wasm_bindgen_test]
fn test_display_list_is_serializable() {
    let editor = RichTextEditor::new(JsValue::UNDEFINED).unwrap();
    assert!(editor.get_display_list().is_ok());
    assert!(editor.get_style_map().is_ok());
}
