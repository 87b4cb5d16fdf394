//! Card and category styling configuration.
//!
//! Palette carried over from the desktop deck: blue for the whole catalog,
//! red for Java, orange for HTML, steel blue for CSS, green for the flip
//! button.

use ratatui::style::{Color, Modifier, Style};

/// Brand blue: `All` tab, navigation buttons, question border.
pub const PRIMARY_COLOR: Color = Color::Rgb(52, 152, 219);
/// Flip button.
pub const SECONDARY_COLOR: Color = Color::Rgb(46, 204, 113);
/// Answer border.
pub const ACCENT_COLOR: Color = Color::Rgb(155, 89, 182);

const JAVA_COLOR: Color = Color::Rgb(220, 80, 70);
const HTML_COLOR: Color = Color::Rgb(240, 150, 50);
const CSS_COLOR: Color = Color::Rgb(40, 120, 180);

/// Muted text for hints and dismissal messages.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Section header in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Resolved from the config file, `NO_COLOR` and `--no-color` before the
/// TUI starts; see [`crate::config::ResolvedConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Color config with colors on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Which navigation button a style is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Previous and Next.
    Navigation,
    /// The flip button.
    Flip,
}

/// Styles for the deck widgets.
///
/// With colors disabled every style falls back to modifiers only (bold,
/// reversed, dim), so the active tab and disabled buttons stay visible on
/// monochrome terminals.
#[derive(Debug, Clone, Copy)]
pub struct CardStyles {
    colors: bool,
}

impl CardStyles {
    /// Styles honoring the color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    /// Color associated with a category tag.
    pub fn category_color(label: &str) -> Color {
        match label.to_ascii_lowercase().as_str() {
            "all" => PRIMARY_COLOR,
            "java" => JAVA_COLOR,
            "html" => HTML_COLOR,
            "css" => CSS_COLOR,
            _ => Color::Gray,
        }
    }

    /// Style of a tab in the category bar.
    pub fn category_tab(&self, label: &str, active: bool) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match (self.colors, active) {
            (true, true) => base.fg(Color::White).bg(Self::category_color(label)),
            (true, false) => base.fg(Self::category_color(label)),
            (false, true) => base.add_modifier(Modifier::REVERSED),
            (false, false) => Style::default(),
        }
    }

    /// Border of the card panel; the answer side gets its own color.
    pub fn card_border(&self, showing_answer: bool) -> Style {
        if !self.colors {
            return Style::default();
        }
        let color = if showing_answer {
            ACCENT_COLOR
        } else {
            PRIMARY_COLOR
        };
        Style::default().fg(color)
    }

    /// Style of a navigation button.
    pub fn button(&self, kind: ButtonKind, enabled: bool) -> Style {
        if !enabled {
            return Style::default().add_modifier(Modifier::DIM);
        }
        let base = Style::default().add_modifier(Modifier::BOLD);
        if !self.colors {
            return base.add_modifier(Modifier::REVERSED);
        }
        let color = match kind {
            ButtonKind::Navigation => PRIMARY_COLOR,
            ButtonKind::Flip => SECONDARY_COLOR,
        };
        base.fg(Color::White).bg(color)
    }

    /// Deck title in the header.
    pub fn header(&self) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        if self.colors {
            base.fg(PRIMARY_COLOR)
        } else {
            base
        }
    }

    /// Labels such as "Category:" on the info line.
    pub fn label(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Hints and other secondary text.
    pub fn muted(&self) -> Style {
        if self.colors {
            MUTED_TEXT
        } else {
            Style::default()
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}

// ===== Tests =====
