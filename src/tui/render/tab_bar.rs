use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ActiveView;
use crate::tui::app::App;

/// Render the tab bar: one tab per view and the connection indicator, with
/// a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{25B6}", Style::default().fg(app.theme.purple).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let current = app.active_view();
    for (i, view) in ActiveView::ALL.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, view.title()),
            tab_style(app, *view == current),
        ));
        spans.push(sep.clone());
    }

    // Connection indicator, right-aligned
    let (label, color) = if app.session.state().connected() {
        ("\u{25CF} Connected", app.theme.green)
    } else {
        ("\u{25CB} Offline", app.theme.red)
    };
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let width = chunks[0].width as usize;
    let label_w = label.chars().count() + 1;
    if used + label_w < width {
        spans.push(Span::styled(
            " ".repeat(width - used - label_w),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(label, Style::default().fg(color).bg(bg)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        chunks[1],
    );
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
