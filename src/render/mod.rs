//! View models: pure functions from [`ClientState`] to what each view shows.
//!
//! Both front ends draw from these, the HTML renderer in [`html`] and the
//! terminal views in `tui::render`, so fallbacks and filtering live here once.

pub mod html;

use crate::form::SelectOption;
use crate::model::{ClientState, Priority, TaskStatus, text_or};
use crate::ops::filter::{filter_tasks, project_name_for};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub in_progress: usize,
    /// Count per board column, in column order
    pub by_status: Vec<(TaskStatus, usize)>,
}

pub fn dashboard_metrics(state: &ClientState) -> DashboardMetrics {
    let count = |status: TaskStatus| {
        state
            .tasks()
            .iter()
            .filter(|t| t.status == Some(status))
            .count()
    };
    DashboardMetrics {
        total_projects: state.projects().len(),
        total_tasks: state.tasks().len(),
        in_progress: count(TaskStatus::InProgress),
        by_status: TaskStatus::COLUMNS.iter().map(|&s| (s, count(s))).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub member_count: usize,
    /// Creation date, YYYY-MM-DD
    pub created: Option<String>,
}

pub fn project_cards(state: &ClientState) -> Vec<ProjectCard> {
    state
        .projects()
        .iter()
        .map(|p| ProjectCard {
            id: p.id,
            name: p.display_name().to_string(),
            description: text_or(p.description.as_deref(), "No description").to_string(),
            owner: p
                .owner
                .map_or_else(|| "Unassigned".to_string(), |o| o.to_string()),
            member_count: p.members.len(),
            created: p.created_at.map(|c| c.format("%Y-%m-%d").to_string()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: u64,
    pub title: String,
    pub project_name: String,
    /// Badge style key: the priority's wire value, "medium" when absent
    pub priority_class: &'static str,
    pub priority_label: &'static str,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub label: &'static str,
    pub cards: Vec<TaskCard>,
}

/// The three board columns after filtering. Tasks with a status outside the
/// three columns are counted nowhere.
pub fn task_board(state: &ClientState) -> Vec<BoardColumn> {
    let filtered = filter_tasks(state);
    TaskStatus::COLUMNS
        .iter()
        .map(|&status| BoardColumn {
            status,
            label: status.label(),
            cards: filtered
                .iter()
                .filter(|t| t.status == Some(status))
                .map(|t| {
                    let priority = t.priority.unwrap_or(Priority::Medium);
                    TaskCard {
                        id: t.id,
                        title: t.display_title().to_string(),
                        project_name: project_name_for(state, t).to_string(),
                        priority_class: priority.as_str(),
                        priority_label: priority.label(),
                        due_date: t.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
                        assignee: t.assigned_to.clone().filter(|a| !a.trim().is_empty()),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Options for the board's project filter select
pub fn filter_options(state: &ClientState) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("all", "All projects"))
        .chain(crate::form::project_options(state.projects()))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_state;
    use super::*;
    use crate::model::ProjectFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn dashboard_counts() {
        let metrics = dashboard_metrics(&sample_state());
        assert_eq!(metrics.total_projects, 2);
        assert_eq!(metrics.total_tasks, 5);
        assert_eq!(metrics.in_progress, 2);
        assert_eq!(
            metrics.by_status,
            vec![
                (TaskStatus::Todo, 1),
                (TaskStatus::InProgress, 2),
                (TaskStatus::Done, 1)
            ]
        );
    }

    #[test]
    fn project_cards_apply_fallbacks() {
        let cards = project_cards(&sample_state());
        assert_eq!(
            cards[0],
            ProjectCard {
                id: 1,
                name: "Apollo".into(),
                description: "Moonshot".into(),
                owner: "3".into(),
                member_count: 2,
                created: None,
            }
        );
        assert_eq!(cards[1].name, "Untitled");
        assert_eq!(cards[1].description, "No description");
        assert_eq!(cards[1].owner, "Unassigned");
    }

    #[test]
    fn board_has_fixed_columns_and_fallbacks() {
        let board = task_board(&sample_state());
        let labels: Vec<_> = board.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["To Do", "In Progress", "Done"]);

        let land = &board[1].cards[1];
        assert_eq!(land.title, "Land");
        assert_eq!(land.priority_label, "Medium");
        assert_eq!(land.project_name, "Untitled");

        let untitled = &board[2].cards[0];
        assert_eq!(untitled.title, "Untitled");
        assert_eq!(untitled.project_name, "Unassigned");
        assert_eq!(untitled.priority_class, "medium");

        assert_eq!(board[0].cards[0].due_date.as_deref(), Some("2025-07-16"));
    }

    #[test]
    fn board_total_matches_filter_predicate() {
        let mut state = sample_state();
        for (filter, term) in [("all", ""), ("1", ""), ("2", ""), ("all", "o"), ("1", "ORB"), ("9", "")] {
            state.set_project_filter(ProjectFilter::from_value(filter));
            state.set_search_term(term);
            let on_board: usize = task_board(&state).iter().map(|c| c.cards.len()).sum();
            let expected = state
                .tasks()
                .iter()
                .filter(|t| filter == "all" || t.project.map(|p| p.to_string()).as_deref() == Some(filter))
                .filter(|t| t.search_text().to_lowercase().contains(&term.to_lowercase()))
                .filter(|t| TaskStatus::COLUMNS.iter().any(|s| t.status == Some(*s)))
                .count();
            assert_eq!(on_board, expected, "filter={filter} term={term}");
        }
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = filter_options(&sample_state());
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["all", "1", "2"]);
        assert_eq!(options[2].label, "Untitled");
    }

    #[test]
    fn cards_carry_created_date_and_assignee() {
        let mut state = ClientState::new();
        state.replace_snapshot(
            serde_json::from_value(serde_json::json!([
                {"id": 1, "name": "Apollo", "created_at": "2025-05-14T09:30:00Z"}
            ]))
            .unwrap(),
            serde_json::from_value(serde_json::json!([
                {"id": 10, "title": "Launch", "status": "todo", "project": 1, "assigned_to": "ana"},
                {"id": 11, "title": "Orbit", "status": "todo", "project": 1, "assigned_to": ""}
            ]))
            .unwrap(),
        );
        assert_eq!(project_cards(&state)[0].created.as_deref(), Some("2025-05-14"));
        let board = task_board(&state);
        assert_eq!(board[0].cards[0].assignee.as_deref(), Some("ana"));
        assert_eq!(board[0].cards[1].assignee, None);
    }
}
