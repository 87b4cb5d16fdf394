//! Category filter bar widget.
//!
//! Displays one tab per filter option (`All` first, then each category in
//! catalog order) inside a bordered block. The active filter is highlighted.
//! Tab positions are computed once here and shared with mouse hit-testing.

use super::constants::CATEGORY_TAB_GAP;
use super::helpers::display_width;
use super::styles::CardStyles;
use crate::model::CategoryFilter;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Caption drawn for a tab, padded so the highlight has some air.
fn tab_caption(option: &CategoryFilter) -> String {
    format!(" {} ", option.label())
}

/// Screen rectangles of each tab, as `(option index, rect)`.
///
/// Tabs are laid out left to right on the row inside the border. Tabs that
/// do not fit are clipped; tabs entirely past the right border are omitted.
pub fn tab_regions(area: Rect, options: &[CategoryFilter]) -> Vec<(usize, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if inner.width == 0 || inner.height == 0 {
        return Vec::new();
    }

    let right = inner.x + inner.width;
    let mut x = inner.x;
    let mut regions = Vec::with_capacity(options.len());

    for (idx, option) in options.iter().enumerate() {
        if x >= right {
            break;
        }
        let width = display_width(&tab_caption(option));
        regions.push((idx, Rect::new(x, inner.y, width.min(right - x), 1)));
        x = x.saturating_add(width + CATEGORY_TAB_GAP);
    }

    regions
}

/// Render the category bar.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The area to render the bar within
/// * `options` - Filter options in display order (`All` first)
/// * `active` - The active filter; compared case-insensitively
/// * `styles` - Deck styles
pub fn render_category_bar(
    frame: &mut Frame,
    area: Rect,
    options: &[CategoryFilter],
    active: &CategoryFilter,
    styles: &CardStyles,
) {
    let gap = " ".repeat(CATEGORY_TAB_GAP as usize);
    let mut spans = Vec::with_capacity(options.len() * 2);

    for (idx, option) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(gap.clone()));
        }
        let is_active = active.selects(option.label());
        spans.push(Span::styled(
            tab_caption(option),
            styles.category_tab(option.label(), is_active),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories "),
    );

    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 3);
        Terminal::new(backend).unwrap()
    }

    fn options() -> Vec<CategoryFilter> {
        ["All", "Java", "HTML", "CSS"]
            .into_iter()
            .map(CategoryFilter::from_label)
            .collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn tab_regions_follow_caption_widths() {
        let regions = tab_regions(Rect::new(0, 0, 60, 3), &options());
        assert_eq!(
            regions,
            vec![
                (0, Rect::new(1, 1, 5, 1)),
                (1, Rect::new(7, 1, 6, 1)),
                (2, Rect::new(14, 1, 6, 1)),
                (3, Rect::new(21, 1, 5, 1)),
            ]
        );
    }

    #[test]
    fn tab_regions_clip_to_narrow_area() {
        // Inner width 10: " All " fits, " Java " is clipped, the rest omitted
        let regions = tab_regions(Rect::new(0, 0, 12, 3), &options());
        assert_eq!(
            regions,
            vec![(0, Rect::new(1, 1, 5, 1)), (1, Rect::new(7, 1, 4, 1))]
        );
    }

    #[test]
    fn tab_regions_empty_for_degenerate_area() {
        assert!(tab_regions(Rect::new(0, 0, 2, 2), &options()).is_empty());
    }

    #[test]
    fn render_displays_all_labels_in_order() {
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                render_category_bar(
                    frame,
                    frame.area(),
                    &options(),
                    &CategoryFilter::All,
                    &CardStyles::default(),
                );
            })
            .unwrap();

        let row = row_text(&terminal, 1);
        assert!(
            row.starts_with("│ All   Java   HTML   CSS "),
            "Unexpected tab row: {:?}",
            row
        );
    }

    #[test]
    fn render_highlights_active_tab() {
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                render_category_bar(
                    frame,
                    frame.area(),
                    &options(),
                    &CategoryFilter::from_label("HTML"),
                    &CardStyles::default(),
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // 'H' of HTML sits at x=15 (tab starts at 14 with a leading space)
        assert_eq!(buffer[(15, 1)].symbol(), "H");
        assert_eq!(buffer[(15, 1)].bg, CardStyles::category_color("HTML"));
        assert_ne!(buffer[(8, 1)].bg, CardStyles::category_color("Java"));
    }
}
