//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line (deck title and key hints).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the category bar in lines (border + tab row).
pub const CATEGORY_BAR_HEIGHT: u16 = 3;

/// Minimum height of the card panel (border + one line of text).
pub const CARD_MIN_HEIGHT: u16 = 3;

/// Height of the info line ("Category: ..." and "Card n of m").
pub const INFO_LINE_HEIGHT: u16 = 1;

/// Height of the navigation button row.
pub const NAV_BAR_HEIGHT: u16 = 1;

/// Columns between adjacent navigation buttons.
pub const NAV_BUTTON_GAP: u16 = 3;

/// Columns between adjacent category tabs.
pub const CATEGORY_TAB_GAP: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
