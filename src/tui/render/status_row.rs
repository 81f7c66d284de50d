use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINT: &str = "n new  e edit  d delete  / search  p filter  r refresh  q quit";
const FORM_HINT: &str = "Tab next field  \u{2190}/\u{2192} choose";
const SEARCH_HINT: &str = "Enter keep  Esc clear";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = match app.mode {
        Mode::Search => vec![
            Span::styled(
                format!("/{}", app.session.state().search_term()),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
        ],
        _ => match &app.status_message {
            Some(message) => {
                let color = if app.status_is_error {
                    app.theme.red
                } else {
                    app.theme.green
                };
                vec![Span::styled(
                    message.clone(),
                    Style::default().fg(color).bg(bg),
                )]
            }
            None => Vec::new(),
        },
    };

    let hint = match app.mode {
        Mode::Navigate => NAVIGATE_HINT,
        Mode::Search => SEARCH_HINT,
        Mode::Form => FORM_HINT,
        Mode::Confirm => "",
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, dim));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
