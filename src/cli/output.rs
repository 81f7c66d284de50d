use std::fmt::Write;

use serde::Serialize;

use crate::model::{ClientState, Task};
use crate::ops::filter::filter_tasks;
use crate::render::{BoardColumn, DashboardMetrics, ProjectCard};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StatusJson<'a> {
    pub api: &'a str,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<usize>,
}

/// Tasks on the filtered board, as JSON
pub fn board_tasks_json(state: &ClientState) -> Result<String, serde_json::Error> {
    let tasks: Vec<&Task> = filter_tasks(state);
    serde_json::to_string_pretty(&tasks)
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

pub fn format_status(api: &str, connected: bool, metrics: Option<&DashboardMetrics>) -> String {
    let mut out = format!(
        "{} {}\n",
        if connected { "Connected" } else { "Offline" },
        api
    );
    if let Some(m) = metrics {
        let _ = writeln!(
            out,
            "{} projects, {} tasks ({} in progress)",
            m.total_projects, m.total_tasks, m.in_progress
        );
        let breakdown: Vec<String> = m
            .by_status
            .iter()
            .map(|(status, count)| format!("{}: {}", status.label(), count))
            .collect();
        let _ = writeln!(out, "{}", breakdown.join("  "));
    }
    out
}

pub fn format_projects(cards: &[ProjectCard]) -> String {
    if cards.is_empty() {
        return "No projects yet.\n".to_string();
    }
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(
            out,
            "#{:<4} {}  (owner: {}, members: {})",
            card.id, card.name, card.owner, card.member_count
        );
        let _ = writeln!(out, "      {}", card.description);
        if let Some(created) = &card.created {
            let _ = writeln!(out, "      Created: {}", created);
        }
    }
    out
}

pub fn format_board(columns: &[BoardColumn]) -> String {
    let mut out = String::new();
    for column in columns {
        let _ = writeln!(out, "{} ({})", column.label, column.cards.len());
        if column.cards.is_empty() {
            out.push_str("  No tasks\n");
        }
        for card in &column.cards {
            let _ = write!(
                out,
                "  #{:<4} {}  [{}]  {}",
                card.id, card.title, card.priority_label, card.project_name
            );
            if let Some(due) = &card.due_date {
                let _ = write!(out, "  due {}", due);
            }
            if let Some(assignee) = &card.assignee {
                let _ = write!(out, "  @{}", assignee);
            }
            out.push('\n');
        }
    }
    out
}
