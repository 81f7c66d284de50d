use crate::model::{Priority, Project, Task, TaskStatus};

use super::{FieldDescriptor, FormPurpose, ModalForm, SelectOption};

/// Form for creating (`None`) or editing a project
pub fn project_form(project: Option<&Project>) -> ModalForm {
    let (title, purpose) = match project {
        Some(p) => ("Edit Project", FormPurpose::EditProject(p.id)),
        None => ("New Project", FormPurpose::CreateProject),
    };
    let name = project.and_then(|p| p.name.clone()).unwrap_or_default();
    let description = project
        .and_then(|p| p.description.clone())
        .unwrap_or_default();

    ModalForm::new(
        title,
        purpose,
        vec![
            FieldDescriptor::text("name", "Project name").with_value(name),
            FieldDescriptor::textarea("description", "Description").with_value(description),
        ],
    )
}

pub fn status_options() -> Vec<SelectOption> {
    TaskStatus::COLUMNS
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

pub fn priority_options() -> Vec<SelectOption> {
    Priority::ALL
        .iter()
        .map(|p| SelectOption::new(p.as_str(), p.label()))
        .collect()
}

/// One option per project, valued by id
pub fn project_options(projects: &[Project]) -> Vec<SelectOption> {
    projects
        .iter()
        .map(|p| SelectOption::new(p.id.to_string(), p.display_name()))
        .collect()
}

/// Form for creating (`None`) or editing a task. The project select lists
/// `projects` and defaults to the task's project, else the first one.
pub fn task_form(task: Option<&Task>, projects: &[Project]) -> ModalForm {
    let (title, purpose) = match task {
        Some(t) => ("Edit Task", FormPurpose::EditTask(t.id)),
        None => ("New Task", FormPurpose::CreateTask),
    };
    let project_options = project_options(projects);
    let project_value = task
        .and_then(|t| t.project)
        .map(|id| id.to_string())
        .or_else(|| project_options.first().map(|o| o.value.clone()))
        .unwrap_or_default();

    let status = task
        .and_then(|t| t.status)
        .unwrap_or(TaskStatus::Todo)
        .as_str();
    let priority = task
        .and_then(|t| t.priority)
        .unwrap_or(Priority::Medium)
        .as_str();

    ModalForm::new(
        title,
        purpose,
        vec![
            FieldDescriptor::text("title", "Title")
                .with_value(task.and_then(|t| t.title.clone()).unwrap_or_default()),
            FieldDescriptor::textarea("description", "Description")
                .with_value(task.and_then(|t| t.description.clone()).unwrap_or_default()),
            FieldDescriptor::select("status", "Status", status_options()).with_value(status),
            FieldDescriptor::select("priority", "Priority", priority_options()).with_value(priority),
            FieldDescriptor::select("project", "Project", project_options).with_value(project_value),
            FieldDescriptor::date("due_date", "Due date").with_value(
                task.and_then(|t| t.due_date)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
        ],
    )
}
