use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use serde_json::json;

use crate::api::fake::FakeApi;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen for `app`
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}

/// Two projects; one task to do, one in progress, none done.
pub fn sample_api() -> FakeApi {
    FakeApi::with_data(
        json!([
            {"id": 1, "name": "Apollo", "description": "Moonshot", "owner": 3, "members": ["ana", "bo"]},
            {"id": 2, "name": "Gemini", "description": "", "owner": null, "members": []}
        ]),
        json!([
            {"id": 10, "title": "Launch", "description": "Count down", "status": "todo",
             "priority": "high", "project": 1, "due_date": "2025-07-16"},
            {"id": 11, "title": "Orbit", "description": "", "status": "in_progress",
             "priority": "low", "project": 2}
        ]),
    )
}

/// A loaded app over [`sample_api`]
pub fn sample_app() -> App {
    let mut app = App::new(Box::new(sample_api()), "http://test/api", Theme::default());
    app.init();
    app
}

/// An app whose API never answers
pub fn offline_app() -> App {
    let api = FakeApi::new();
    api.set_offline(true);
    let mut app = App::new(Box::new(api), "http://test/api", Theme::default());
    app.init();
    app
}
