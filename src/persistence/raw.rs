//! Raw snapshot format
//!
//! The persisted form of a document: a JSON object with an ordered block
//! list and an (always empty) entity map.
//!
//! ```json
//! {
//!   "blocks": [
//!     {
//!       "key": "3k9f1",
//!       "text": "hello",
//!       "type": "unstyled",
//!       "depth": 0,
//!       "inlineStyleRanges": [{ "offset": 0, "length": 5, "style": "BOLD" }],
//!       "entityRanges": [],
//!       "data": {}
//!     }
//!   ],
//!   "entityMap": {}
//! }
//! ```
//!
//! Offsets and lengths count Unicode scalar values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SnapshotError;
use crate::models::{Block, BlockType, ContentState, InlineStyle, StyleRange};

/// Serialized document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: Map<String, Value>,
}

/// Serialized block
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    pub key: String,
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<Value>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Serialized inline style range
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

/// Convert a document to its raw form
pub fn convert_to_raw(content: &ContentState) -> RawContent {
    let blocks = content
        .blocks()
        .iter()
        .map(|block| RawBlock {
            key: block.key().to_string(),
            text: block.text().to_string(),
            block_type: block.block_type().as_str().to_string(),
            depth: 0,
            inline_style_ranges: block
                .style_ranges()
                .into_iter()
                .map(|range| RawStyleRange {
                    offset: range.offset,
                    length: range.length,
                    style: range.style.name().to_string(),
                })
                .collect(),
            entity_ranges: Vec::new(),
            data: Map::new(),
        })
        .collect();

    RawContent {
        blocks,
        entity_map: Map::new(),
    }
}

/// Rebuild a document from its raw form, validating every block
pub fn convert_from_raw(raw: &RawContent) -> Result<ContentState, SnapshotError> {
    if raw.blocks.is_empty() {
        return Err(SnapshotError::NoBlocks);
    }

    let mut seen = HashSet::new();
    let mut blocks = Vec::with_capacity(raw.blocks.len());

    for raw_block in &raw.blocks {
        if !seen.insert(raw_block.key.as_str()) {
            return Err(SnapshotError::DuplicateKey(raw_block.key.clone()));
        }
        blocks.push(convert_block(raw_block)?);
    }

    Ok(ContentState::from_blocks(blocks))
}

fn convert_block(raw: &RawBlock) -> Result<Block, SnapshotError> {
    let block_type = BlockType::from_name(&raw.block_type).ok_or_else(|| SnapshotError::UnknownBlockType {
        key: raw.key.clone(),
        block_type: raw.block_type.clone(),
    })?;

    let len = raw.text.chars().count();
    let mut ranges = Vec::with_capacity(raw.inline_style_ranges.len());
    for range in &raw.inline_style_ranges {
        let style = InlineStyle::from_name(&range.style).ok_or_else(|| SnapshotError::UnknownStyle {
            key: raw.key.clone(),
            style: range.style.clone(),
        })?;

        let in_bounds = range
            .offset
            .checked_add(range.length)
            .is_some_and(|end| end <= len);
        if !in_bounds {
            return Err(SnapshotError::RangeOutOfBounds {
                key: raw.key.clone(),
                offset: range.offset,
                length: range.length,
                len,
            });
        }

        ranges.push(StyleRange {
            offset: range.offset,
            length: range.length,
            style,
        });
    }

    Ok(Block::from_ranges(raw.key.clone(), block_type, raw.text.clone(), &ranges))
}

/// Encode a document as snapshot JSON
pub fn serialize(content: &ContentState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&convert_to_raw(content))?)
}

/// Decode snapshot JSON into a document
pub fn deserialize(json: &str) -> Result<ContentState, SnapshotError> {
    let raw: RawContent = serde_json::from_str(json)?;
    convert_from_raw(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentState {
        ContentState::from_blocks(vec![
            Block::new("h1", "Title").with_type(BlockType::HeaderOne),
            Block::new("p1", "bold and red")
                .map_styles(0, 4, |s| s.with(InlineStyle::Bold))
                .map_styles(9, 12, |s| s.with(InlineStyle::Red)),
            Block::new("p2", ""),
        ])
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let content = sample();
        let json = serialize(&content).unwrap();
        let restored = deserialize(&json).unwrap();

        assert_eq!(restored.blocks(), content.blocks());
    }

    #[test]
    fn test_raw_shape() {
        let raw = convert_to_raw(&sample());
        let json = serde_json::to_value(&raw).unwrap();

        assert_eq!(json["blocks"][0]["type"], "header-one");
        assert_eq!(json["blocks"][1]["inlineStyleRanges"][0]["style"], "BOLD");
        assert_eq!(json["blocks"][1]["inlineStyleRanges"][1]["offset"], 9);
        assert!(json["entityMap"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_accepts_minimal_blocks() {
        let content = deserialize(r#"{"blocks":[{"key":"a","text":"hi","type":"unstyled"}]}"#).unwrap();
        assert_eq!(content.first_block().text(), "hi");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(deserialize("not json"), Err(SnapshotError::Json(_))));
        assert!(matches!(deserialize(r#"{"blocks":[]}"#), Err(SnapshotError::NoBlocks)));
        assert!(matches!(
            deserialize(r#"{"blocks":[{"key":"a","text":"","type":"unstyled"},{"key":"a","text":"","type":"unstyled"}]}"#),
            Err(SnapshotError::DuplicateKey(_))
        ));
        assert!(matches!(
            deserialize(r#"{"blocks":[{"key":"a","text":"","type":"code-block"}]}"#),
            Err(SnapshotError::UnknownBlockType { .. })
        ));
        assert!(matches!(
            deserialize(r#"{"blocks":[{"key":"a","text":"ab","type":"unstyled","inlineStyleRanges":[{"offset":0,"length":2,"style":"ITALIC"}]}]}"#),
            Err(SnapshotError::UnknownStyle { .. })
        ));
        assert!(matches!(
            deserialize(r#"{"blocks":[{"key":"a","text":"ab","type":"unstyled","inlineStyleRanges":[{"offset":1,"length":2,"style":"BOLD"}]}]}"#),
            Err(SnapshotError::RangeOutOfBounds { .. })
        ));
    }
}
