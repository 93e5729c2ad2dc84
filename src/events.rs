//! Event handling layer for Repotrend's TUI.
//!
//! Translates terminal input into the two mutation intents the design
//! allows: toggling a row's favorite flag and changing the filter
//! selection, plus list navigation and quitting.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};

use crate::logic;
use crate::state::AppState;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the input thread
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Row and filter mutations are ignored while the fetch is in flight or
///   after a fetch failure, since there are no rows to act on.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }

    if app.loading || app.error.is_some() {
        return false;
    }

    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => logic::move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => logic::move_selection(app, 1),
        KeyCode::Left | KeyCode::Char('h') => logic::cycle_language(app, -1),
        KeyCode::Right | KeyCode::Char('l') => logic::cycle_language(app, 1),
        KeyCode::Char('o') => {
            app.filters.favorites_only = !app.filters.favorites_only;
            logic::clamp_selection(app);
        }
        KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = logic::selected_row_id(app) {
                logic::toggle_favorite(&mut app.rows, id);
                // The toggled row may drop out of a favorites-only view
                logic::clamp_selection(app);
            }
        }
        _ => {}
    }
    false
}
