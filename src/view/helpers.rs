//! Small line builders shared by the widgets.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// A "key  description" line with the key column padded to `key_width`.
pub fn key_hint_line(
    key: &'static str,
    description: &'static str,
    key_width: usize,
    key_style: Style,
    desc_style: Style,
) -> Line<'static> {
    let padding = key_width.saturating_sub(key.width());
    Line::from(vec![
        Span::styled(format!("  {}{}", key, " ".repeat(padding)), key_style),
        Span::styled(description, desc_style),
    ])
}

/// Display width of a label in terminal columns, saturated to `u16`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
