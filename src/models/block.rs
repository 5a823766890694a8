//! Content blocks
//!
//! A block is one paragraph of the document. Text offsets are counted in
//! Unicode scalar values (chars), and every char carries its own style set.

use serde::{Deserialize, Serialize};

use super::style::{BlockType, InlineStyle, StyleSet};

/// A span of characters within a block carrying one style
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

/// A maximal run of characters sharing one style set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    pub styles: StyleSet,
}

/// One paragraph-level unit of the document
///
/// Blocks are never mutated once shared; every edit builds a new block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    key: String,
    block_type: BlockType,
    text: String,
    /// One entry per char of `text`
    styles: Vec<StyleSet>,
}

impl Block {
    /// Create an unstyled block with no character styles
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let styles = vec![StyleSet::EMPTY; text.chars().count()];
        Self {
            key: key.into(),
            block_type: BlockType::Unstyled,
            text,
            styles,
        }
    }

    /// Create an empty block of the given type
    pub fn empty(key: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            key: key.into(),
            block_type,
            text: String::new(),
            styles: Vec::new(),
        }
    }

    /// Build a block from text and style ranges
    ///
    /// Ranges must already be validated against the text length.
    pub fn from_ranges(
        key: impl Into<String>,
        block_type: BlockType,
        text: impl Into<String>,
        ranges: &[StyleRange],
    ) -> Self {
        let mut block = Block::new(key, text).with_type(block_type);
        for range in ranges {
            for set in &mut block.styles[range.offset..range.offset + range.length] {
                *set = set.with(range.style);
            }
        }
        block
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style set of the char at `offset`, empty past the end
    pub fn style_at(&self, offset: usize) -> StyleSet {
        self.styles.get(offset).copied().unwrap_or_default()
    }

    pub fn char_styles(&self) -> &[StyleSet] {
        &self.styles
    }

    /// Text between two char offsets
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let from = byte_offset(&self.text, start);
        let to = byte_offset(&self.text, end);
        &self.text[from..to]
    }

    pub fn with_type(&self, block_type: BlockType) -> Block {
        Block {
            block_type,
            ..self.clone()
        }
    }

    pub fn with_key(&self, key: impl Into<String>) -> Block {
        Block {
            key: key.into(),
            ..self.clone()
        }
    }

    /// Replace chars `start..end` with `insert`, each inserted char styled `style`
    pub fn splice(&self, start: usize, end: usize, insert: &str, style: StyleSet) -> Block {
        let end = end.min(self.len());
        let start = start.min(end);
        let from = byte_offset(&self.text, start);
        let to = byte_offset(&self.text, end);

        let mut text = String::with_capacity(self.text.len() + insert.len());
        text.push_str(&self.text[..from]);
        text.push_str(insert);
        text.push_str(&self.text[to..]);

        let mut styles = Vec::with_capacity(self.styles.len() + insert.len());
        styles.extend_from_slice(&self.styles[..start]);
        styles.extend(insert.chars().map(|_| style));
        styles.extend_from_slice(&self.styles[end..]);

        Block {
            key: self.key.clone(),
            block_type: self.block_type,
            text,
            styles,
        }
    }

    /// Split at `offset`; the tail keeps this block's type and takes `tail_key`
    pub fn split_at(&self, offset: usize, tail_key: impl Into<String>) -> (Block, Block) {
        let offset = offset.min(self.len());
        let byte = byte_offset(&self.text, offset);
        let head = Block {
            key: self.key.clone(),
            block_type: self.block_type,
            text: self.text[..byte].to_string(),
            styles: self.styles[..offset].to_vec(),
        };
        let tail = Block {
            key: tail_key.into(),
            block_type: self.block_type,
            text: self.text[byte..].to_string(),
            styles: self.styles[offset..].to_vec(),
        };
        (head, tail)
    }

    /// Append the text and styles of `other`, keeping this block's key and type
    pub fn concat(&self, other: &Block) -> Block {
        let mut text = self.text.clone();
        text.push_str(&other.text);
        let mut styles = self.styles.clone();
        styles.extend_from_slice(&other.styles);
        Block {
            key: self.key.clone(),
            block_type: self.block_type,
            text,
            styles,
        }
    }

    /// Map the style set of every char in `start..end`
    pub fn map_styles(&self, start: usize, end: usize, f: impl Fn(StyleSet) -> StyleSet) -> Block {
        let end = end.min(self.len());
        let mut styles = self.styles.clone();
        for set in styles.iter_mut().take(end).skip(start) {
            *set = f(*set);
        }
        Block {
            styles,
            ..self.clone()
        }
    }

    /// Maximal runs of equal style sets, in text order
    pub fn style_runs(&self) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::new();
        for (i, styles) in self.styles.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.styles == *styles => run.end = i + 1,
                _ => runs.push(StyleRun {
                    start: i,
                    end: i + 1,
                    styles: *styles,
                }),
            }
        }
        runs
    }

    /// Per-style ranges, grouped by style in canonical order
    pub fn style_ranges(&self) -> Vec<StyleRange> {
        let mut ranges = Vec::new();
        for style in InlineStyle::ALL {
            let mut open: Option<usize> = None;
            for (i, styles) in self.styles.iter().enumerate() {
                match (styles.contains(style), open) {
                    (true, None) => open = Some(i),
                    (false, Some(start)) => {
                        ranges.push(StyleRange { offset: start, length: i - start, style });
                        open = None;
                    }
                    _ => {}
                }
            }
            if let Some(start) = open {
                ranges.push(StyleRange {
                    offset: start,
                    length: self.len() - start,
                    style,
                });
            }
        }
        ranges
    }
}

/// Byte index of the char at `offset`, or the string length past the end
pub fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
