//! Screen layout and rendering of the deck.
//!
//! The same [`ScreenLayout`] drives rendering and mouse hit-testing, so a
//! click always lands on what was drawn.
//!
//! ```text
//! Programming Flashcards - Java, HTML & CSS          ? help  q quit
//! ┌────────────────────────────────────────────────────────────────┐
//! │ All   Java   HTML   CSS                                        │
//! └────────────────────────────────────────────────────────────────┘
//! ┌ Question ──────────────────────────────────────────────────────┐
//! │ What is the basic syntax to declare a variable in Java?        │
//! └────────────────────────────────────────────────────────────────┘
//!               Category: Java    Card 1 of 16
//!          ◀ Previous    Flip to Answer    Next ▶
//! ```

use super::category_bar;
use super::constants::{
    CARD_MIN_HEIGHT, CATEGORY_BAR_HEIGHT, HEADER_HEIGHT, INFO_LINE_HEIGHT, NAV_BAR_HEIGHT,
    NAV_BUTTON_GAP,
};
use super::helpers::display_width;
use super::styles::{ButtonKind, CardStyles, ColorConfig};
use crate::model::CategoryFilter;
use crate::state::{AppState, RenderSnapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Title prefix shown in the header.
pub const DECK_TITLE: &str = "Programming Flashcards";

/// Key hints shown at the right of the header.
const HEADER_HINT: &str = "? help  q quit";

// ===== Layout =====

/// Named regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row with key hints.
    pub header: Rect,
    /// Bordered row of category tabs.
    pub category_bar: Rect,
    /// The card body; takes the remaining height.
    pub card: Rect,
    /// Category and position line.
    pub info: Rect,
    /// Previous, Flip and Next buttons.
    pub nav: Rect,
}

impl ScreenLayout {
    /// Split the frame area top to bottom.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(CATEGORY_BAR_HEIGHT),
                Constraint::Min(CARD_MIN_HEIGHT),
                Constraint::Length(INFO_LINE_HEIGHT),
                Constraint::Length(NAV_BAR_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            category_bar: chunks[1],
            card: chunks[2],
            info: chunks[3],
            nav: chunks[4],
        }
    }
}

/// The three buttons of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    /// Step back one card.
    Previous,
    /// Toggle question and answer.
    Flip,
    /// Step forward one card.
    Next,
}

impl NavButton {
    /// Button caption for the given snapshot.
    pub fn label(self, snapshot: &RenderSnapshot) -> &'static str {
        match self {
            Self::Previous => " ◀ Previous ",
            Self::Flip if snapshot.showing_answer => " Flip to Question ",
            Self::Flip => " Flip to Answer ",
            Self::Next => " Next ▶ ",
        }
    }

    /// Whether the button currently does anything.
    pub fn enabled(self, snapshot: &RenderSnapshot) -> bool {
        match self {
            Self::Previous => snapshot.can_go_prev,
            // Flipping only needs a card on screen
            Self::Flip => !snapshot.category_text.is_empty(),
            Self::Next => snapshot.can_go_next,
        }
    }

    fn kind(self) -> ButtonKind {
        match self {
            Self::Flip => ButtonKind::Flip,
            Self::Previous | Self::Next => ButtonKind::Navigation,
        }
    }
}

/// Something the user can click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A tab in the category bar.
    Category(CategoryFilter),
    /// A button in the navigation row.
    Nav(NavButton),
}

/// Button positions within the navigation row, centered as a group.
pub fn nav_button_regions(area: Rect, snapshot: &RenderSnapshot) -> Vec<(NavButton, Rect)> {
    let buttons = [NavButton::Previous, NavButton::Flip, NavButton::Next];
    let widths: Vec<u16> = buttons
        .iter()
        .map(|b| display_width(b.label(snapshot)))
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + NAV_BUTTON_GAP * (buttons.len() as u16 - 1);

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x + area.width;
    let mut regions = Vec::with_capacity(buttons.len());

    for (button, width) in buttons.into_iter().zip(widths) {
        if x >= right {
            break;
        }
        let visible = width.min(right - x);
        regions.push((button, Rect::new(x, area.y, visible, area.height.min(1))));
        x = x.saturating_add(width + NAV_BUTTON_GAP);
    }

    regions
}

/// Resolve a click at (`column`, `row`) against the layout.
pub fn hit_test(
    layout: &ScreenLayout,
    state: &AppState,
    column: u16,
    row: u16,
) -> Option<ClickTarget> {
    let viewer = state.viewer();

    if contains(layout.category_bar, column, row) {
        let options = viewer.category_options();
        return category_bar::tab_regions(layout.category_bar, &options)
            .into_iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(idx, _)| ClickTarget::Category(options[idx].clone()));
    }

    if contains(layout.nav, column, row) {
        let snapshot = viewer.render();
        return nav_button_regions(layout.nav, &snapshot)
            .into_iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| ClickTarget::Nav(button));
    }

    None
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Header title listing the deck's categories: "A", "A & B", "A, B & C".
pub fn deck_title(categories: &[&str]) -> String {
    match categories {
        [] => DECK_TITLE.to_string(),
        [only] => format!("{} - {}", DECK_TITLE, only),
        [init @ .., last] => format!("{} - {} & {}", DECK_TITLE, init.join(", "), last),
    }
}

// ===== Rendering =====

/// Render the whole deck screen, plus the help overlay when visible.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let layout = ScreenLayout::new(frame.area());
    let styles = CardStyles::with_color_config(ColorConfig::new(state.colors_enabled));
    let viewer = state.viewer();
    let snapshot = viewer.render();

    render_header(frame, layout.header, state, &styles);
    category_bar::render_category_bar(
        frame,
        layout.category_bar,
        &viewer.category_options(),
        viewer.active_filter(),
        &styles,
    );
    render_card(frame, layout.card, &snapshot, &styles);
    render_info_line(frame, layout.info, state, &snapshot, &styles);
    render_nav_bar(frame, layout.nav, &snapshot, &styles);

    if state.help_visible {
        super::help::render_help_overlay(frame, state.help_scroll);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &CardStyles) {
    let title = deck_title(&state.viewer().store().categories());

    let hint = Paragraph::new(Span::styled(HEADER_HINT, styles.muted())).alignment(Alignment::Right);
    frame.render_widget(hint, area);

    let header = Paragraph::new(Span::styled(title, styles.header()));
    frame.render_widget(header, area);
}

fn render_card(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, styles: &CardStyles) {
    let title = if snapshot.showing_answer {
        " Answer "
    } else {
        " Question "
    };

    let card = Paragraph::new(snapshot.body_text.as_str())
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(styles.card_border(snapshot.showing_answer))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

fn render_info_line(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &RenderSnapshot,
    styles: &CardStyles,
) {
    // Nothing visible: name the filter that matched nothing
    let category = if snapshot.category_text.is_empty() {
        state.viewer().active_filter().label().to_string()
    } else {
        snapshot.category_text.clone()
    };

    let line = Line::from(vec![
        Span::styled("Category: ", styles.label()),
        Span::raw(category),
        Span::raw("    "),
        Span::raw(format!("Card {}", snapshot.position_text)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_nav_bar(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, styles: &CardStyles) {
    for (button, rect) in nav_button_regions(area, snapshot) {
        let style = styles.button(button.kind(), button.enabled(snapshot));
        frame.render_widget(
            Paragraph::new(Span::styled(button.label(snapshot), style)),
            rect,
        );
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
