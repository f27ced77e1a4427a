//! Formatting utilities used for console tables and exports.

use unicode_width::UnicodeWidthStr;

/// Terminal display width of `s` (CJK and emoji count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-align `s` in a cell of `width` display columns.
/// Longer values are never truncated.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}
