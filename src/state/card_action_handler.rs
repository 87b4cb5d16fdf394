//! Card and category keyboard action handler.
//!
//! Pure functions that transform AppState in response to card navigation and
//! category filter actions. Application-level actions (help, help scrolling,
//! quit) are handled by the view layer and pass through unchanged.

use crate::model::{CategoryFilter, KeyAction};
use crate::state::AppState;
use tracing::debug;

/// Handle a card navigation or category filter action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The action to handle
///
/// Returns a new AppState with the action applied. Actions that cannot apply
/// (next at the last card, an out-of-range category number, ...) leave the
/// state unchanged.
pub fn handle_card_action(mut state: AppState, action: KeyAction) -> AppState {
    let viewer = state.viewer_mut();

    match action {
        KeyAction::PrevCard => {
            viewer.previous();
        }
        KeyAction::NextCard => {
            viewer.next();
        }
        KeyAction::Flip => {
            viewer.flip();
        }
        KeyAction::SelectAll => viewer.select_category(CategoryFilter::All),
        KeyAction::SelectCategory(number) => {
            // 1-based over the categories, excluding the leading `All`
            let options = viewer.category_options();
            match number.checked_sub(1).and_then(|idx| options.get(idx + 1)) {
                Some(filter) => viewer.select_category(filter.clone()),
                None => {
                    debug!(number, "no category at this number");
                }
            }
        }
        KeyAction::NextCategory => {
            let filter = cycle_filter(&viewer.category_options(), viewer.active_filter(), true);
            viewer.select_category(filter);
        }
        KeyAction::PrevCategory => {
            let filter = cycle_filter(&viewer.category_options(), viewer.active_filter(), false);
            viewer.select_category(filter);
        }
        KeyAction::ScrollUp | KeyAction::ScrollDown | KeyAction::Help | KeyAction::Quit => {}
    }

    state
}

/// Step through the category bar with wrapping.
///
/// A filter that is not on the bar (e.g. an unknown start category) steps to
/// `All` going forward and to the last category going backward.
fn cycle_filter(
    options: &[CategoryFilter],
    current: &CategoryFilter,
    forward: bool,
) -> CategoryFilter {
    let len = options.len();
    if len == 0 {
        return CategoryFilter::All;
    }

    let position = options.iter().position(|o| current.selects(o.label()));
    let next = match (position, forward) {
        (Some(pos), true) => (pos + 1) % len,
        (Some(pos), false) => (pos + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    options[next].clone()
}

// ===== Tests =====

#[cfg(test)]
#[path = "card_action_handler_tests.rs"]
mod tests;
