use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::dispatch::Event;
use crate::tui::app::App;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let _ = app.dispatch(Event::CancelModal);
        }
        KeyCode::Enter => app.dispatch_with_message(Event::SubmitModal, "Saved"),
        code => {
            let Some(form) = app.session.modal_mut().form_mut() else {
                return;
            };
            match code {
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Left => form.cycle_option(-1),
                KeyCode::Right => form.cycle_option(1),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) => form.insert_char(c),
                _ => {}
            }
        }
    }
}
