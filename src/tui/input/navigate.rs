use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::ActiveView;
use crate::ops::dispatch::Event;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Views
        KeyCode::Char('1') => show(app, ActiveView::Dashboard),
        KeyCode::Char('2') => show(app, ActiveView::Projects),
        KeyCode::Char('3') => show(app, ActiveView::Tasks),
        KeyCode::Tab => {
            let next = app.active_view().next();
            show(app, next);
        }

        KeyCode::Char('r') => app.dispatch_with_message(Event::Refresh, "Refreshed"),

        // Create / edit / delete
        KeyCode::Char('n') => {
            app.clear_message();
            let event = if app.active_view() == ActiveView::Tasks {
                Event::NewTask
            } else {
                Event::NewProject
            };
            let _ = app.dispatch(event);
        }
        KeyCode::Char('e') => {
            let event = match app.active_view() {
                ActiveView::Projects => app.selected_project().map(Event::EditProject),
                ActiveView::Tasks => app.selected_task().map(Event::EditTask),
                ActiveView::Dashboard => None,
            };
            if let Some(event) = event {
                app.clear_message();
                let _ = app.dispatch(event);
            }
        }
        KeyCode::Char('d') => app.request_delete(),

        // Board filtering
        KeyCode::Char('/') => {
            show(app, ActiveView::Tasks);
            app.mode = Mode::Search;
        }
        KeyCode::Char('p') => {
            show(app, ActiveView::Tasks);
            app.cycle_project_filter();
        }
        KeyCode::Char('c') => {
            let _ = app.dispatch(Event::ClearProjectFilter);
        }

        // Movement
        KeyCode::Down | KeyCode::Char('j') => app.move_row(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_column(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_column(-1),
        _ => {}
    }
}

fn show(app: &mut App, view: ActiveView) {
    if app.active_view() != view {
        let _ = app.dispatch(Event::ShowView(view));
    }
}
