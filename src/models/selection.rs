//! Selection state
//!
//! An immutable anchor/focus pair addressed by block key and char offset.

use serde::{Deserialize, Serialize};

/// Anchor and focus of the current selection
///
/// `is_backward` is true when the focus precedes the anchor in document
/// order. It is computed against the content when the selection is adopted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub anchor_key: String,
    pub anchor_offset: usize,
    pub focus_key: String,
    pub focus_offset: usize,
    #[serde(default)]
    pub is_backward: bool,
    #[serde(default)]
    pub has_focus: bool,
}

impl SelectionState {
    /// Collapsed caret at `offset` in block `key`
    pub fn collapsed(key: impl Into<String>, offset: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
            is_backward: false,
            has_focus: false,
        }
    }

    /// Forward selection within one block
    pub fn range(key: impl Into<String>, start: usize, end: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset: start,
            focus_key: key,
            focus_offset: end,
            is_backward: false,
            has_focus: false,
        }
    }

    /// Forward selection spanning blocks
    pub fn between(
        anchor_key: impl Into<String>,
        anchor_offset: usize,
        focus_key: impl Into<String>,
        focus_offset: usize,
    ) -> Self {
        Self {
            anchor_key: anchor_key.into(),
            anchor_offset,
            focus_key: focus_key.into(),
            focus_offset,
            is_backward: false,
            has_focus: false,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }

    pub fn start_key(&self) -> &str {
        if self.is_backward { &self.focus_key } else { &self.anchor_key }
    }

    pub fn start_offset(&self) -> usize {
        if self.is_backward { self.focus_offset } else { self.anchor_offset }
    }

    pub fn end_key(&self) -> &str {
        if self.is_backward { &self.anchor_key } else { &self.focus_key }
    }

    pub fn end_offset(&self) -> usize {
        if self.is_backward { self.anchor_offset } else { self.focus_offset }
    }

    /// Copy of this selection with the focus flag set
    pub fn with_focus(&self, has_focus: bool) -> Self {
        Self {
            has_focus,
            ..self.clone()
        }
    }

    /// Collapsed caret at this selection's start
    pub fn collapse_to_start(&self) -> Self {
        SelectionState::collapsed(self.start_key(), self.start_offset()).with_focus(self.has_focus)
    }

    /// True if both selections name the same anchor and focus
    pub fn same_range(&self, other: &SelectionState) -> bool {
        self.anchor_key == other.anchor_key
            && self.anchor_offset == other.anchor_offset
            && self.focus_key == other.focus_key
            && self.focus_offset == other.focus_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_selection_edges() {
        let sel = SelectionState {
            anchor_key: "b".to_string(),
            anchor_offset: 2,
            focus_key: "a".to_string(),
            focus_offset: 1,
            is_backward: true,
            has_focus: true,
        };

        assert_eq!(sel.start_key(), "a");
        assert_eq!(sel.start_offset(), 1);
        assert_eq!(sel.end_key(), "b");
        assert_eq!(sel.end_offset(), 2);
        assert!(!sel.is_collapsed());
        assert_eq!(sel.collapse_to_start(), SelectionState::collapsed("a", 1).with_focus(true));
    }

    #[test]
    fn test_deserialize_from_js_shape() {
        let sel: SelectionState = serde_json::from_str(
            r#"{"anchorKey":"k1","anchorOffset":0,"focusKey":"k1","focusOffset":3}"#,
        )
        .unwrap();
        assert_eq!(sel, SelectionState::range("k1", 0, 3));
    }
}
