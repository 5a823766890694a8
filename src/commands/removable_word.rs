//! Word boundaries for word-wise deletion
//!
//! A word is a run of letters, digits and underscores, possibly containing
//! apostrophes. Whitespace and punctuation next to the word go with it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Last word of the text plus any trailing separators
static BACKWARD_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[^\s\p{P}]|_)(?:['\x{2018}\x{2019}]|[^\s\p{P}]|_)*[\s\p{P}--_]*$")
        .expect("backward word pattern is valid")
});

/// Leading separators plus the first word of the text
static FORWARD_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\p{P}--_]*(?:['\x{2018}\x{2019}]|[^\s\p{P}]|_)*(?:[^\s\p{P}]|_)")
        .expect("forward word pattern is valid")
});

/// Chars to remove when deleting the word before the end of `text`
pub fn backward_len(text: &str) -> usize {
    BACKWARD_WORD
        .find(text)
        .map(|m| m.as_str().chars().count())
        .unwrap_or(0)
}

/// Chars to remove when deleting the word at the start of `text`
pub fn forward_len(text: &str) -> usize {
    FORWARD_WORD
        .find(text)
        .map(|m| m.as_str().chars().count())
        .unwrap_or(0)
}
