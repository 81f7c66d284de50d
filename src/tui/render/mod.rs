pub mod board_view;
pub mod confirm_popup;
pub mod dashboard_view;
pub mod modal;
pub mod projects_view;
pub mod status_row;
pub mod tab_bar;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::ActiveView;

use super::app::{App, Mode};

/// Main render function, dispatching to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.active_view() {
        ActiveView::Dashboard => dashboard_view::render_dashboard_view(frame, app, chunks[1]),
        ActiveView::Projects => projects_view::render_projects_view(frame, app, chunks[1]),
        ActiveView::Tasks => board_view::render_board_view(frame, app, chunks[1]),
    }

    // Popups on top of everything
    app.modal_area = None;
    match app.mode {
        Mode::Form => app.modal_area = modal::render_modal(frame, app, area),
        Mode::Confirm => confirm_popup::render_confirm_popup(frame, app, area),
        _ => {}
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// A `width` x `height` rect centered in `area`, clipped to fit
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
