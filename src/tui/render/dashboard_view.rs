use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TaskStatus;
use crate::render::dashboard_metrics;
use crate::tui::app::App;
use crate::util::unicode::pad_to_width;

const LABEL_W: usize = 14;
const BAR_MAX: usize = 30;

/// Render the dashboard: headline counts, then a bar per board column
pub fn render_dashboard_view(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = dashboard_metrics(app.session.state());
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let value_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let metric = |label: &str, value: usize| {
        Line::from(vec![
            Span::styled(format!(" {}", pad_to_width(label, LABEL_W)), label_style),
            Span::styled(value.to_string(), value_style),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        metric("Projects", metrics.total_projects),
        metric("Tasks", metrics.total_tasks),
        metric("In Progress", metrics.in_progress),
        Line::from(""),
        Line::from(Span::styled(
            " Tasks by status",
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let max = metrics
        .by_status
        .iter()
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(0)
        .max(1);
    for (status, count) in &metrics.by_status {
        let bar = "\u{2588}".repeat(count * BAR_MAX / max);
        let color = match status {
            TaskStatus::InProgress => app.theme.highlight,
            TaskStatus::Done => app.theme.green,
            _ => app.theme.cyan,
        };
        let mut spans = vec![Span::styled(
            format!(" {}", pad_to_width(status.label(), LABEL_W)),
            label_style,
        )];
        if !bar.is_empty() {
            spans.push(Span::styled(bar, Style::default().fg(color).bg(bg)));
            spans.push(Span::styled(" ", label_style));
        }
        spans.push(Span::styled(count.to_string(), value_style));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
