//! Inline style map
//!
//! Visual attributes for each inline style, handed to the renderer as a
//! value. The rendering surface never looks styles up globally.

use serde::Serialize;

use crate::models::{InlineStyle, StyleSet};

/// CSS declarations for one inline style
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDefinition {
    pub style: InlineStyle,
    pub css: &'static [(&'static str, &'static str)],
}

/// Style name to CSS table
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleMap {
    pub entries: &'static [StyleDefinition],
}

const DEFAULT_ENTRIES: [StyleDefinition; 3] = [
    StyleDefinition {
        style: InlineStyle::Bold,
        css: &[("font-weight", "bold")],
    },
    StyleDefinition {
        style: InlineStyle::Red,
        css: &[("color", "red")],
    },
    StyleDefinition {
        style: InlineStyle::Underline,
        css: &[("text-decoration", "underline")],
    },
];

impl Default for StyleMap {
    fn default() -> Self {
        StyleMap {
            entries: &DEFAULT_ENTRIES,
        }
    }
}

impl StyleMap {
    pub fn definition(&self, style: InlineStyle) -> Option<&StyleDefinition> {
        self.entries.iter().find(|d| d.style == style)
    }

    /// Inline CSS for a set of styles, e.g. `font-weight: bold; color: red`
    pub fn css_for(&self, styles: StyleSet) -> String {
        styles
            .iter()
            .filter_map(|style| self.definition(style))
            .flat_map(|d| d.css.iter())
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_for_combined_styles() {
        let map = StyleMap::default();
        let styles = StyleSet::of(InlineStyle::Red).with(InlineStyle::Bold);
        assert_eq!(map.css_for(styles), "font-weight: bold; color: red");
        assert_eq!(map.css_for(StyleSet::EMPTY), "");
    }

    #[test]
    fn test_every_style_has_definition() {
        let map = StyleMap::default();
        for style in InlineStyle::ALL {
            assert!(map.definition(style).is_some(), "{} missing", style);
        }
    }
}
