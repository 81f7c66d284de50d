use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::render::project_cards;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Rows per card: name line, description line, spacer
const CARD_ROWS: usize = 3;

/// Render the projects list, one card per project
pub fn render_projects_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let cards = project_cards(app.session.state());
    let width = area.width as usize;

    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No projects yet. Press n to create one.",
                Style::default().fg(app.theme.dim).bg(bg),
            ))
            .style(Style::default().bg(bg)),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        let row_bg = if i == app.project_cursor {
            app.theme.selection_bg
        } else {
            bg
        };
        let marker = if i == app.project_cursor { "\u{258C}" } else { " " };
        let mut meta = format!("Owner: {}  Members: {} ", card.owner, card.member_count);
        if let Some(created) = &card.created {
            meta = format!("Created: {}  {}", created, meta);
        }
        let name_w = width.saturating_sub(display_width(&meta) + 3);
        let name = truncate_to_width(&card.name, name_w);
        let pad = width.saturating_sub(1 + 1 + display_width(&name) + display_width(&meta));

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(
                name,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
            Span::styled(meta, Style::default().fg(app.theme.dim).bg(row_bg)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", truncate_to_width(&card.description, width.saturating_sub(3))),
            Style::default().fg(app.theme.text).bg(bg),
        )));
        lines.push(Line::from(""));
    }

    // Keep the cursor's card on screen
    let height = area.height as usize;
    let cursor_bottom = (app.project_cursor + 1) * CARD_ROWS;
    let scroll = cursor_bottom.saturating_sub(height) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .scroll((scroll, 0)),
        area,
    );
}
