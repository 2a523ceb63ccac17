//! Shared utility functions used across modules.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to `max_width` display columns, appending "..." if truncated.
///
/// Counts terminal columns rather than bytes so wide (CJK) process names
/// never split a character.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

/// Longest prefix of `s` that fits in `width` columns.
fn take_width(s: &str, width: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
