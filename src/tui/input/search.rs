use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::dispatch::Event;
use crate::tui::app::{App, Mode};

/// Every keystroke re-filters the board; Enter keeps the term, Esc clears it
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    let mut term = app.session.state().search_term().to_string();
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            term.clear();
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Backspace => {
            term.pop();
        }
        KeyCode::Char(c) => term.push(c),
        _ => return,
    }
    let _ = app.dispatch(Event::SetSearch(term));
}
