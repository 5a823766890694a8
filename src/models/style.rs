//! Inline styles and block types
//!
//! The editor supports exactly three inline styles and two block types.
//! Inline styles are stored per character as a compact bit set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inline (character-level) style
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InlineStyle {
    #[serde(rename = "BOLD")]
    Bold,
    /// Custom color style (rendered red)
    #[serde(rename = "RED")]
    Red,
    #[serde(rename = "UNDERLINE")]
    Underline,
}

impl InlineStyle {
    /// All styles, in canonical order
    pub const ALL: [InlineStyle; 3] = [InlineStyle::Bold, InlineStyle::Red, InlineStyle::Underline];

    /// Name used in snapshots and style maps
    pub fn name(self) -> &'static str {
        match self {
            InlineStyle::Bold => "BOLD",
            InlineStyle::Red => "RED",
            InlineStyle::Underline => "UNDERLINE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        InlineStyle::ALL.into_iter().find(|s| s.name() == name)
    }

    fn bit(self) -> u8 {
        match self {
            InlineStyle::Bold => 0x01,
            InlineStyle::Red => 0x02,
            InlineStyle::Underline => 0x04,
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of inline styles applied to one character
///
/// Serializes as a list of style names so the rendering surface can read it
/// directly.
#[derive(Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(into = "Vec<InlineStyle>", from = "Vec<InlineStyle>")]
pub struct StyleSet(u8);

impl StyleSet {
    pub const EMPTY: StyleSet = StyleSet(0);

    pub fn of(style: InlineStyle) -> Self {
        StyleSet(style.bit())
    }

    pub fn contains(self, style: InlineStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn with(self, style: InlineStyle) -> Self {
        StyleSet(self.0 | style.bit())
    }

    pub fn without(self, style: InlineStyle) -> Self {
        StyleSet(self.0 & !style.bit())
    }

    /// Add the style if absent, remove it if present
    pub fn toggled(self, style: InlineStyle) -> Self {
        StyleSet(self.0 ^ style.bit())
    }

    pub fn iter(self) -> impl Iterator<Item = InlineStyle> {
        InlineStyle::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        iter.into_iter().fold(StyleSet::EMPTY, StyleSet::with)
    }
}

impl From<Vec<InlineStyle>> for StyleSet {
    fn from(styles: Vec<InlineStyle>) -> Self {
        styles.into_iter().collect()
    }
}

impl From<StyleSet> for Vec<InlineStyle> {
    fn from(set: StyleSet) -> Self {
        set.iter().collect()
    }
}

/// Paragraph-level block type
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    HeaderOne,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::HeaderOne => "header-one",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unstyled" => Some(BlockType::Unstyled),
            "header-one" => Some(BlockType::HeaderOne),
            _ => None,
        }
    }

    /// HTML element the rendering surface wraps the block in
    pub fn html_tag(self) -> &'static str {
        match self {
            BlockType::Unstyled => "div",
            BlockType::HeaderOne => "h1",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_set_toggle() {
        let set = StyleSet::EMPTY.toggled(InlineStyle::Bold);
        assert!(set.contains(InlineStyle::Bold));
        assert!(!set.contains(InlineStyle::Red));

        let set = set.toggled(InlineStyle::Bold);
        assert!(set.is_empty());
    }

    #[test]
    fn test_style_set_serializes_as_names() {
        let set = StyleSet::of(InlineStyle::Underline).with(InlineStyle::Bold);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["BOLD","UNDERLINE"]"#);

        let back: StyleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_style_names() {
        assert_eq!(InlineStyle::from_name("RED"), Some(InlineStyle::Red));
        assert_eq!(InlineStyle::from_name("ITALIC"), None);
        assert_eq!(BlockType::from_name("header-one"), Some(BlockType::HeaderOne));
        assert_eq!(
            serde_json::to_string(&BlockType::HeaderOne).unwrap(),
            r#""header-one""#
        );
    }
}
