use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::centered;

/// Render the y/n delete confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(target) = &app.pending_delete else {
        return;
    };
    let bg = app.theme.background;
    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let text_w = popup_w.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(Span::styled(
            target.prompt(),
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(Span::styled(
            truncate_to_width(target.label(), text_w),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(app.theme.red).bg(bg)),
            Span::styled(" delete  ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("n", Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(" cancel", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let popup = centered(area, popup_w, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title(Span::styled(
            " Confirm ",
            Style::default().fg(app.theme.red).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActiveView;
    use crate::ops::dispatch::Event;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn asks_about_selected_task() {
        let mut app = sample_app();
        let _ = app.dispatch(Event::ShowView(ActiveView::Tasks));
        app.request_delete();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains(" Confirm "));
        assert!(output.contains("Delete this task?"));
        assert!(output.contains("Launch"));
        assert!(output.contains("y delete  n cancel"));
    }
}
