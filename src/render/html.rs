//! HTML markup for each view.
//!
//! Every piece of server or user text goes through [`escape_html`],
//! attribute values included.

use std::fmt::Write;

use crate::form::{FieldKind, ModalForm};
use crate::model::{ActiveView, ClientState};

use super::{BoardColumn, TaskCard, dashboard_metrics, filter_options, project_cards, task_board};

/// Escape `& < > " '` for use in text and attribute values
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn dashboard_html(state: &ClientState) -> String {
    let metrics = dashboard_metrics(state);
    let mut html = String::from("<section class=\"metrics\">\n");
    let _ = writeln!(
        html,
        "  <div class=\"metric\"><span>Projects</span><strong id=\"metricProjects\">{}</strong></div>",
        metrics.total_projects
    );
    let _ = writeln!(
        html,
        "  <div class=\"metric\"><span>Tasks</span><strong id=\"metricTasks\">{}</strong></div>",
        metrics.total_tasks
    );
    let _ = writeln!(
        html,
        "  <div class=\"metric\"><span>In Progress</span><strong id=\"metricInProgress\">{}</strong></div>",
        metrics.in_progress
    );
    html.push_str("  <ul class=\"status-breakdown\">\n");
    for (status, count) in &metrics.by_status {
        let _ = writeln!(
            html,
            "    <li class=\"{}\">{}: {}</li>",
            status.as_str(),
            status.label(),
            count
        );
    }
    html.push_str("  </ul>\n</section>\n");
    html
}

pub fn projects_html(state: &ClientState) -> String {
    let cards = project_cards(state);
    if cards.is_empty() {
        return "<p>No projects yet.</p>\n".to_string();
    }
    let mut html = String::new();
    for card in cards {
        let _ = write!(
            html,
            "<div class=\"card\">
  <div>
    <h3>{name}</h3>
    <p>{description}</p>
  </div>
  <div class=\"card-meta\">
    <span>Owner: {owner}</span>
    <span>Members: {members}</span>
  </div>
  <div class=\"card-actions\">
    <button class=\"ghost\" data-action=\"edit-project\" data-id=\"{id}\">Edit</button>
    <button class=\"ghost\" data-action=\"delete-project\" data-id=\"{id}\">Delete</button>
  </div>
</div>
",
            name = escape_html(&card.name),
            description = escape_html(&card.description),
            owner = escape_html(&card.owner),
            members = card.member_count,
            id = card.id,
        );
    }
    html
}

pub fn task_card_html(card: &TaskCard) -> String {
    let due = card
        .due_date
        .as_deref()
        .map(|d| format!("\n  <span class=\"due\">Due {}</span>", escape_html(d)))
        .unwrap_or_default();
    format!(
        "<div class=\"card-task\">
  <strong>{title}</strong>
  <span>{project}</span>
  <span class=\"badge {class}\">{label}</span>{due}
  <div class=\"card-actions\">
    <button class=\"ghost\" data-action=\"edit-task\" data-id=\"{id}\">Edit</button>
    <button class=\"ghost\" data-action=\"delete-task\" data-id=\"{id}\">Delete</button>
  </div>
</div>
",
        title = escape_html(&card.title),
        project = escape_html(&card.project_name),
        class = escape_html(card.priority_class),
        label = card.priority_label,
        id = card.id,
    )
}

fn column_html(column: &BoardColumn) -> String {
    let body = if column.cards.is_empty() {
        "<p>No tasks</p>\n".to_string()
    } else {
        column.cards.iter().map(task_card_html).collect()
    };
    format!(
        "<div class=\"column\" data-status=\"{status}\">
<div class=\"column-header\">
  <div class=\"column-title\">{label}</div>
  <div>{count}</div>
</div>
<div class=\"column-body\">
{body}</div>
</div>
",
        status = column.status.as_str(),
        label = column.label,
        count = column.cards.len(),
    )
}

pub fn task_board_html(state: &ClientState) -> String {
    task_board(state).iter().map(column_html).collect()
}

/// The board's project filter `<select>`, with the current filter selected
pub fn filter_select_html(state: &ClientState) -> String {
    let current = state.project_filter().as_value();
    let mut html = String::from("<select id=\"projectFilter\">\n");
    for option in filter_options(state) {
        let selected = if option.value == current { " selected" } else { "" };
        let _ = writeln!(
            html,
            "  <option value=\"{}\"{}>{}</option>",
            escape_html(&option.value),
            selected,
            escape_html(&option.label)
        );
    }
    html.push_str("</select>\n");
    html
}

/// The modal form: one labeled control per field, pre-populated
pub fn modal_html(form: &ModalForm) -> String {
    let mut html = format!(
        "<form id=\"modalForm\">\n<h2 id=\"modalTitle\">{}</h2>\n",
        escape_html(form.title())
    );
    for (idx, field) in form.fields().iter().enumerate() {
        let name = escape_html(&field.name);
        let value = escape_html(form.value_at(idx));
        let _ = writeln!(
            html,
            "<label class=\"field\">\n  <span>{}</span>",
            escape_html(&field.label)
        );
        match &field.kind {
            FieldKind::Textarea => {
                let _ = writeln!(html, "  <textarea name=\"{}\">{}</textarea>", name, value);
            }
            FieldKind::Select(options) => {
                let _ = writeln!(html, "  <select name=\"{}\">", name);
                for option in options {
                    let selected = if option.value == form.value_at(idx) {
                        " selected"
                    } else {
                        ""
                    };
                    let _ = writeln!(
                        html,
                        "    <option value=\"{}\"{}>{}</option>",
                        escape_html(&option.value),
                        selected,
                        escape_html(&option.label)
                    );
                }
                html.push_str("  </select>\n");
            }
            kind => {
                let _ = writeln!(
                    html,
                    "  <input type=\"{}\" name=\"{}\" value=\"{}\">",
                    kind.input_type(),
                    name,
                    value
                );
            }
        }
        html.push_str("</label>\n");
    }
    html.push_str(
        "<div class=\"modal-actions\">\n  <button type=\"button\" id=\"cancelModal\">Cancel</button>\n  <button type=\"submit\">Save</button>\n</div>\n</form>\n",
    );
    html
}

/// Markup for whichever view is active
pub fn view_html(state: &ClientState) -> String {
    match state.active_view() {
        ActiveView::Dashboard => dashboard_html(state),
        ActiveView::Projects => projects_html(state),
        ActiveView::Tasks => format!("{}{}", filter_select_html(state), task_board_html(state)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{project_form, task_form};
    use crate::model::ProjectFilter;
    use crate::render::fixtures::sample_state;
    use insta::assert_snapshot;
    use serde_json::json;

    fn state_with(projects: serde_json::Value, tasks: serde_json::Value) -> ClientState {
        let mut state = ClientState::new();
        state.replace_snapshot(
            serde_json::from_value(projects).unwrap(),
            serde_json::from_value(tasks).unwrap(),
        );
        state
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_snapshot!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), @"&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;");
    }

    #[test]
    fn script_in_project_name_is_inert() {
        let state = state_with(
            json!([{"id": 1, "name": "<script>alert(1)</script>", "description": "a > b"}]),
            json!([]),
        );
        let html = projects_html(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &gt; b"));
    }

    #[test]
    fn script_in_task_title_is_inert() {
        let state = state_with(
            json!([{"id": 1, "name": "<b>P</b>"}]),
            json!([{"id": 5, "title": "<script>x</script>", "status": "todo", "project": 1}]),
        );
        let html = task_board_html(&state);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;P&lt;/b&gt;"));
    }

    #[test]
    fn empty_states_render_placeholders() {
        let state = ClientState::new();
        assert_eq!(projects_html(&state), "<p>No projects yet.</p>\n");
        let board = task_board_html(&state);
        assert_eq!(board.matches("<p>No tasks</p>").count(), 3);
    }

    #[test]
    fn dashboard_shows_counts() {
        let html = dashboard_html(&sample_state());
        assert!(html.contains("<strong id=\"metricProjects\">2</strong>"));
        assert!(html.contains("<strong id=\"metricTasks\">5</strong>"));
        assert!(html.contains("<strong id=\"metricInProgress\">2</strong>"));
        assert!(html.contains("<li class=\"done\">Done: 1</li>"));
    }

    #[test]
    fn board_columns_in_order_with_counts() {
        let html = task_board_html(&sample_state());
        let todo = html.find("data-status=\"todo\"").unwrap();
        let doing = html.find("data-status=\"in_progress\"").unwrap();
        let done = html.find("data-status=\"done\"").unwrap();
        assert!(todo < doing && doing < done);
        assert!(html.contains("<div class=\"column-title\">In Progress</div>\n  <div>2</div>"));
        assert!(html.contains("data-action=\"delete-task\" data-id=\"12\""));
    }

    #[test]
    fn unknown_priority_badge_reads_medium() {
        let state = state_with(
            json!([]),
            json!([{"id": 1, "title": "t", "status": "todo", "priority": "urgent"}]),
        );
        let html = task_board_html(&state);
        assert!(html.contains("<span class=\"badge unrecognized\">Medium</span>"));
    }

    #[test]
    fn filter_select_marks_current() {
        let mut state = sample_state();
        state.set_project_filter(ProjectFilter::from_value("2"));
        let html = filter_select_html(&state);
        assert!(html.contains("<option value=\"all\">All projects</option>"));
        assert!(html.contains("<option value=\"2\" selected>Untitled</option>"));
    }

    #[test]
    fn modal_renders_one_control_per_field() {
        let state = sample_state();
        let html = modal_html(&task_form(state.find_task(10), state.projects()));
        assert_eq!(html.matches("<label class=\"field\">").count(), 6);
        assert!(html.contains("<input type=\"text\" name=\"title\" value=\"Launch\">"));
        assert!(html.contains("<textarea name=\"description\">Count down</textarea>"));
        assert!(html.contains("<option value=\"high\" selected>High</option>"));
        assert!(html.contains("<input type=\"date\" name=\"due_date\" value=\"2025-07-16\">"));
    }

    #[test]
    fn modal_escapes_prefilled_values() {
        let state = state_with(json!([{"id": 1, "name": "\"quoted\" <name>"}]), json!([]));
        let html = modal_html(&project_form(state.find_project(1)));
        assert!(html.contains("value=\"&quot;quoted&quot; &lt;name&gt;\""));
    }

    #[test]
    fn view_html_follows_active_view() {
        let mut state = sample_state();
        assert!(view_html(&state).contains("metricProjects"));
        state.set_active_view(ActiveView::Tasks);
        let html = view_html(&state);
        assert!(html.starts_with("<select id=\"projectFilter\">"));
        assert!(html.contains("column-header"));
    }
}
