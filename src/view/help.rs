//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{empty_line, key_hint_line};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the key column in the help listing.
const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
///
/// The scroll_offset parameter controls which line is shown at the top.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered in `area` covering the given percentages.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    // width * percent overflows u16 past ~1092 columns
    let popup_width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Number of lines in the help listing, before wrapping.
pub(crate) fn help_line_count() -> u16 {
    build_help_content().len() as u16
}

/// Build the help content lines grouped by category.
pub(crate) fn build_help_content() -> Vec<Line<'static>> {
    let category_style = super::styles::SECTION_HEADER;
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);
    let entry = |key, desc| key_hint_line(key, desc, KEY_COLUMN_WIDTH, key_style, desc_style);

    vec![
        Line::from(vec![Span::styled("Cards", category_style)]),
        entry("h/←/p", "Previous card"),
        entry("l/→/n", "Next card"),
        entry("Space/Enter/f", "Flip between question and answer"),
        empty_line(),
        Line::from(vec![Span::styled("Categories", category_style)]),
        entry("0/a", "Show all cards"),
        entry("1-9", "Show one category (bar order)"),
        entry("Tab", "Next category"),
        entry("Shift+Tab", "Previous category"),
        entry("Click", "Select a category tab or press a button"),
        empty_line(),
        Line::from(vec![Span::styled("Application", category_style)]),
        entry("?", "Toggle this help"),
        entry("j/k/↓/↑", "Scroll this help"),
        entry("Esc", "Close this help"),
        entry("q/Ctrl+c", "Quit"),
    ]
}
