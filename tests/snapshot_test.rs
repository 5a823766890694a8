// Snapshot format tests against documents produced by real editing

use std::rc::Rc;

use serde_json::Value;

use richtext_editor_wasm::persistence::{self, KeyValueStore, MemoryStore, STORAGE_KEY};
use richtext_editor_wasm::{
    BlockType, EditorConfig, EditorSession, HandleValue, InlineStyle, Notice, Notifier, SelectionState, SnapshotError,
    StyleSet,
};

struct Quiet;

impl Notifier for Quiet {
    fn notify(&self, _notice: &Notice) {}
}

fn session_with(store: &Rc<MemoryStore>) -> EditorSession {
    EditorSession::new(Box::new(Rc::clone(store)), Box::new(Quiet), EditorConfig::default())
}

fn type_text(session: &mut EditorSession, text: &str) {
    for ch in text.chars() {
        let input = ch.to_string();
        if session.on_before_input(&input).1 == HandleValue::NotHandled {
            session.insert_text(&input);
        }
    }
}

#[test]
fn test_saved_json_uses_raw_field_names() {
    let store = Rc::new(MemoryStore::new());
    let mut session = session_with(&store);
    type_text(&mut session, "* hi");
    session.save().unwrap();

    let json = store.get(STORAGE_KEY).unwrap().expect("snapshot written");
    let value: Value = serde_json::from_str(&json).unwrap();

    assert!(value["entityMap"].as_object().unwrap().is_empty());
    let block = &value["blocks"][0];
    assert_eq!(block["text"], "hi");
    assert_eq!(block["type"], "unstyled");
    assert_eq!(block["depth"], 0);
    assert_eq!(block["inlineStyleRanges"][0]["style"], "BOLD");
    assert_eq!(block["inlineStyleRanges"][0]["offset"], 0);
    assert_eq!(block["inlineStyleRanges"][0]["length"], 2);
    assert!(block["entityRanges"].as_array().unwrap().is_empty());
}

#[test]
fn test_overlapping_styles_survive_reload() {
    let store = Rc::new(MemoryStore::new());
    let mut session = session_with(&store);
    type_text(&mut session, "* hi there");

    let key = session.state().current_content().first_block().key().to_string();
    session.set_selection(&SelectionState::range(key, 0, 2)).unwrap();
    assert_eq!(session.on_key_command("underline"), HandleValue::Handled);
    session.save().unwrap();

    let reloaded = session_with(&store);
    let block = reloaded.state().current_content().first_block();
    assert_eq!(block.text(), "hi there");
    assert_eq!(block.style_at(0), StyleSet::of(InlineStyle::Bold).with(InlineStyle::Underline));
    assert_eq!(block.style_at(5), StyleSet::of(InlineStyle::Bold));
}

#[test]
fn test_offsets_count_characters() {
    let store = Rc::new(MemoryStore::new());
    let mut session = session_with(&store);
    type_text(&mut session, "*** héllo");
    session.save().unwrap();

    let value: Value = serde_json::from_str(&store.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(value["blocks"][0]["inlineStyleRanges"][0]["length"], 5);

    let reloaded = session_with(&store);
    assert_eq!(
        reloaded.state().current_content().first_block().style_at(4),
        StyleSet::of(InlineStyle::Underline)
    );
}

#[test]
fn test_block_keys_and_types_are_preserved() {
    let store = Rc::new(MemoryStore::new());
    let mut session = session_with(&store);
    type_text(&mut session, "# One");
    session.on_return();
    type_text(&mut session, "two");
    session.save().unwrap();

    let reloaded = session_with(&store);
    let before: Vec<_> = session
        .state()
        .current_content()
        .blocks()
        .iter()
        .map(|b| (b.key().to_string(), b.block_type()))
        .collect();
    let after: Vec<_> = reloaded
        .state()
        .current_content()
        .blocks()
        .iter()
        .map(|b| (b.key().to_string(), b.block_type()))
        .collect();

    assert_eq!(before, after);
    assert_eq!(after[0].1, BlockType::HeaderOne);
    assert_eq!(after[1].1, BlockType::Unstyled);
}

#[test]
fn test_minimal_snapshot_fills_defaults() {
    let content = persistence::deserialize(r#"{"blocks":[{"key":"a1","text":"plain","type":"unstyled"}]}"#).unwrap();
    assert_eq!(content.blocks().len(), 1);
    assert_eq!(content.first_block().text(), "plain");
    assert!(content.first_block().style_ranges().is_empty());
}

#[test]
fn test_invalid_snapshots_are_rejected() {
    let dup = r#"{"blocks":[{"key":"a","text":"","type":"unstyled"},{"key":"a","text":"","type":"unstyled"}],"entityMap":{}}"#;
    assert!(matches!(persistence::deserialize(dup), Err(SnapshotError::DuplicateKey(_))));

    let style = r#"{"blocks":[{"key":"a","text":"x","type":"unstyled","inlineStyleRanges":[{"offset":0,"length":1,"style":"ITALIC"}]}]}"#;
    assert!(matches!(persistence::deserialize(style), Err(SnapshotError::UnknownStyle { .. })));

    let range = r#"{"blocks":[{"key":"a","text":"x","type":"unstyled","inlineStyleRanges":[{"offset":0,"length":4,"style":"BOLD"}]}]}"#;
    assert!(matches!(persistence::deserialize(range), Err(SnapshotError::RangeOutOfBounds { .. })));

    assert!(matches!(persistence::deserialize(r#"{"blocks":[]}"#), Err(SnapshotError::NoBlocks)));
    assert!(matches!(persistence::deserialize("not json"), Err(SnapshotError::Json(_))));
}
