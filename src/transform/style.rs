//! Inline style transformations over a selection

use crate::models::{ContentState, InlineStyle, SelectionState, StyleSet};

/// Add `style` to every char in the selection
pub fn apply_inline_style(content: &ContentState, selection: &SelectionState, style: InlineStyle) -> ContentState {
    map_selected_styles(content, selection, |s| s.with(style))
}

/// Remove `style` from every char in the selection
pub fn remove_inline_style(content: &ContentState, selection: &SelectionState, style: InlineStyle) -> ContentState {
    map_selected_styles(content, selection, |s| s.without(style))
}

/// True if the selection covers at least one char and every char has `style`
pub fn selection_has_style(content: &ContentState, selection: &SelectionState, style: InlineStyle) -> bool {
    let mut seen = false;
    for (index, start, end) in selected_spans(content, selection) {
        let block = &content.blocks()[index];
        for offset in start..end {
            seen = true;
            if !block.style_at(offset).contains(style) {
                return false;
            }
        }
    }
    seen
}

fn map_selected_styles(
    content: &ContentState,
    selection: &SelectionState,
    f: impl Fn(StyleSet) -> StyleSet,
) -> ContentState {
    let mut result = content.clone();
    for (index, start, end) in selected_spans(content, selection) {
        let block = content.blocks()[index].map_styles(start, end, &f);
        result = result.with_block(index, block);
    }
    result.with_selection_after(selection.clone())
}

/// `(block index, start, end)` for each block the selection touches
fn selected_spans(content: &ContentState, selection: &SelectionState) -> Vec<(usize, usize, usize)> {
    let (Some(start_index), Some(end_index)) = (
        content.block_index(selection.start_key()),
        content.block_index(selection.end_key()),
    ) else {
        return Vec::new();
    };

    (start_index..=end_index)
        .map(|index| {
            let len = content.blocks()[index].len();
            let start = if index == start_index { selection.start_offset() } else { 0 };
            let end = if index == end_index { selection.end_offset() } else { len };
            (index, start.min(len), end.min(len))
        })
        .collect()
}
