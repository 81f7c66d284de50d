use crate::model::{ClientState, ProjectFilter, Task};

/// Does `task` belong to the filtered project?
pub fn matches_project(task: &Task, filter: &ProjectFilter) -> bool {
    match filter {
        ProjectFilter::All => true,
        ProjectFilter::Project(id) => task.project.is_some_and(|p| p.to_string() == *id),
    }
}

/// Case-insensitive substring match over title and description
pub fn matches_search(task: &Task, term: &str) -> bool {
    task.search_text()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Tasks the board shows, in server order
pub fn filter_tasks(state: &ClientState) -> Vec<&Task> {
    let filter = state.project_filter();
    let term = state.search_term();
    state
        .tasks()
        .iter()
        .filter(|t| matches_project(t, filter) && matches_search(t, term))
        .collect()
}

/// Label for the task's project, resolved against the loaded projects
pub fn project_name_for<'a>(state: &'a ClientState, task: &Task) -> &'a str {
    task.project
        .and_then(|id| state.find_project(id))
        .map_or("Unassigned", |p| p.display_name())
}
