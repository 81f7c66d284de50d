use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Priority;
use crate::render::{BoardColumn, TaskCard, filter_options, task_board};
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

/// Render the task board: filter line, then one bordered column per status
pub fn render_board_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_filter_line(frame, app, chunks[0]);

    let board = task_board(app.session.state());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, board.len().max(1) as u32); board.len()])
        .split(chunks[1]);

    for (i, (column, rect)) in board.iter().zip(columns.iter()).enumerate() {
        let cursor_row = (app.board_cursor.column == i).then_some(app.board_cursor.row);
        render_column(frame, app, column, cursor_row, *rect);
    }
}

fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let state = app.session.state();
    let current = state.project_filter().as_value();
    let project = filter_options(state)
        .into_iter()
        .find(|o| o.value == current)
        .map_or_else(|| format!("#{}", current), |o| o.label);

    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text_bright).bg(bg);
    let mut spans = vec![
        Span::styled(" Project: ", label),
        Span::styled(project, value),
    ];
    let term = state.search_term();
    if !term.is_empty() || app.mode == Mode::Search {
        spans.push(Span::styled("   Search: ", label));
        spans.push(Span::styled(term.to_string(), value));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    column: &BoardColumn,
    cursor_row: Option<usize>,
    area: Rect,
) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(
            format!(" {} ({}) ", column.label, column.cards.len()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    if column.cards.is_empty() {
        lines.push(Line::from(Span::styled(
            "No tasks",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    for (i, card) in column.cards.iter().enumerate() {
        lines.extend(card_lines(app, card, cursor_row == Some(i), width));
    }

    // Two rows per card; keep the cursor's card on screen
    let scroll = cursor_row
        .map_or(0, |row| ((row + 1) * 2).saturating_sub(inner.height as usize)) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn card_lines(app: &App, card: &TaskCard, selected: bool, width: usize) -> Vec<Line<'static>> {
    let row_bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let priority = Priority::parse(card.priority_class).unwrap_or(Priority::Medium);

    let title = truncate_to_width(&card.title, width);
    let mut meta = vec![
        Span::styled(
            card.priority_label,
            Style::default()
                .fg(app.theme.priority_color(priority))
                .bg(row_bg),
        ),
        Span::styled(
            format!(" \u{00B7} {}", card.project_name),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ),
    ];
    if let Some(due) = &card.due_date {
        meta.push(Span::styled(
            format!(" \u{00B7} {}", due),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));
    }
    if let Some(assignee) = &card.assignee {
        meta.push(Span::styled(
            format!(" \u{00B7} @{}", assignee),
            Style::default().fg(app.theme.cyan).bg(row_bg),
        ));
    }

    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(meta),
    ]
}
