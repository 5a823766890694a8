//! Markdown-style shortcut triggers
//!
//! A trigger is a short literal that, typed as the entire content of a block
//! and followed by a space, is consumed and turned into a format:
//!
//! | Block text | Action                |
//! |------------|-----------------------|
//! | `#`        | heading block         |
//! | `*`        | bold                  |
//! | `**`       | red (custom color)    |
//! | `***`      | underline             |
//!
//! Rules are checked in table order and the first match wins. Matching is
//! exact, so the order only matters for rules added later that share a
//! literal with an existing one.

use serde::{Deserialize, Serialize};

use crate::models::{BlockType, InlineStyle};

/// Input that completes a trigger
pub const TRIGGER_INPUT: &str = " ";

/// Decision for one pending input
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Not a trigger; the input is inserted normally
    NoAction,
    ConvertToHeading,
    ConvertToBold,
    ConvertToColorStyle,
    ConvertToUnderline,
}

/// What an action does to the document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Block(BlockType),
    Inline(InlineStyle),
}

struct TriggerRule {
    text: &'static str,
    action: Action,
}

const TRIGGER_RULES: [TriggerRule; 4] = [
    TriggerRule { text: "#", action: Action::ConvertToHeading },
    TriggerRule { text: "*", action: Action::ConvertToBold },
    TriggerRule { text: "**", action: Action::ConvertToColorStyle },
    TriggerRule { text: "***", action: Action::ConvertToUnderline },
];

impl Action {
    /// Length in chars of the trigger text the action consumes
    pub fn trigger_len(self) -> usize {
        TRIGGER_RULES
            .iter()
            .find(|rule| rule.action == self)
            .map(|rule| rule.text.chars().count())
            .unwrap_or(0)
    }

    pub fn format(self) -> Option<Format> {
        match self {
            Action::NoAction => None,
            Action::ConvertToHeading => Some(Format::Block(BlockType::HeaderOne)),
            Action::ConvertToBold => Some(Format::Inline(InlineStyle::Bold)),
            Action::ConvertToColorStyle => Some(Format::Inline(InlineStyle::Red)),
            Action::ConvertToUnderline => Some(Format::Inline(InlineStyle::Underline)),
        }
    }
}

/// Classify a pending input against the text of the block it lands in
pub fn decide(block_text: &str, pending_input: &str) -> Action {
    if pending_input != TRIGGER_INPUT {
        return Action::NoAction;
    }

    TRIGGER_RULES
        .iter()
        .find(|rule| rule.text == block_text)
        .map(|rule| rule.action)
        .unwrap_or(Action::NoAction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_fire_on_space() {
        assert_eq!(decide("#", " "), Action::ConvertToHeading);
        assert_eq!(decide("*", " "), Action::ConvertToBold);
        assert_eq!(decide("**", " "), Action::ConvertToColorStyle);
        assert_eq!(decide("***", " "), Action::ConvertToUnderline);
    }

    #[test]
    fn test_exact_match_required() {
        assert_eq!(decide("#x", " "), Action::NoAction);
        assert_eq!(decide("x*", " "), Action::NoAction);
        assert_eq!(decide(" #", " "), Action::NoAction);
        assert_eq!(decide("****", " "), Action::NoAction);
        assert_eq!(decide("", " "), Action::NoAction);
    }

    #[test]
    fn test_non_space_input_never_triggers() {
        let texts = ["", "#", "*", "**", "***", "hello", "#x"];
        let inputs = ["a", "#", "*", "\t", "  ", "\u{a0}", ""];
        for text in texts {
            for input in inputs {
                assert_eq!(decide(text, input), Action::NoAction, "{:?} + {:?}", text, input);
            }
        }
    }

    #[test]
    fn test_trigger_lengths() {
        assert_eq!(Action::ConvertToHeading.trigger_len(), 1);
        assert_eq!(Action::ConvertToBold.trigger_len(), 1);
        assert_eq!(Action::ConvertToColorStyle.trigger_len(), 2);
        assert_eq!(Action::ConvertToUnderline.trigger_len(), 3);
        assert_eq!(Action::NoAction.trigger_len(), 0);
    }

    #[test]
    fn test_action_formats() {
        assert_eq!(Action::ConvertToHeading.format(), Some(Format::Block(BlockType::HeaderOne)));
        assert_eq!(Action::ConvertToColorStyle.format(), Some(Format::Inline(InlineStyle::Red)));
        assert_eq!(Action::NoAction.format(), None);
    }
}
