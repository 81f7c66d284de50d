use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::form::FieldKind;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::centered;

const MODAL_W: u16 = 60;

/// Render the open form as a centered popup and return the area it covers
pub fn render_modal(frame: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    let form = app.session.modal().form()?;
    let bg = app.theme.background;

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let focus_label_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(app.theme.text).bg(bg);
    let focus_value_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg);

    let popup_w = MODAL_W.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focus();
        lines.push(Line::from(Span::styled(
            field.label.clone(),
            if focused { focus_label_style } else { label_style },
        )));

        let raw = form.value_at(idx);
        let shown = match &field.kind {
            FieldKind::Select(options) => {
                let label = options
                    .iter()
                    .find(|o| o.value == raw)
                    .map_or("(none)", |o| o.label.as_str());
                format!("\u{2039} {} \u{203A}", label)
            }
            FieldKind::Date if raw.is_empty() && !focused => "YYYY-MM-DD".to_string(),
            _ => raw.replace('\n', " "),
        };
        let cursor = if focused && !matches!(field.kind, FieldKind::Select(_)) {
            "\u{258C}"
        } else {
            ""
        };
        let text_w = if cursor.is_empty() {
            inner_w
        } else {
            inner_w.saturating_sub(1)
        };
        let text = truncate_to_width(&shown, text_w);
        lines.push(Line::from(vec![
            Span::styled(text, if focused { focus_value_style } else { value_style }),
            Span::styled(cursor, Style::default().fg(app.theme.highlight).bg(bg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter save  Esc cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let popup_h = lines.len() as u16 + 2;
    let popup = centered(area, popup_w, popup_h);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            format!(" {} ", form.title()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), body);

    Some(popup)
}
