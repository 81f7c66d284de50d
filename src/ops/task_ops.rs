use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::api::{RequestOptions, TASKS_PATH, Transport, task_path};
use crate::form::FormValues;
use crate::model::ClientState;

use super::sync::load_data;
use super::{Confirm, OpError, Outcome, parse_id};

/// Body for `POST /tasks/` and `PUT /tasks/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub project: u64,
    /// `null` when the date field was left empty
    pub due_date: Option<NaiveDate>,
}

impl TaskPayload {
    pub fn from_form(values: &FormValues) -> Result<Self, OpError> {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        let project = parse_id("project", &field("project"))?;
        let due_raw = field("due_date");
        let due_date = match due_raw.trim() {
            "" => None,
            raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                OpError::InvalidDate {
                    field: "due_date".to_string(),
                    value: due_raw.clone(),
                }
            })?),
        };
        Ok(TaskPayload {
            title: field("title"),
            description: field("description"),
            status: field("status"),
            priority: field("priority"),
            project,
            due_date,
        })
    }
}

pub fn create_task(
    transport: &dyn Transport,
    state: &mut ClientState,
    values: &FormValues,
) -> Result<(), OpError> {
    let payload = TaskPayload::from_form(values)?;
    transport.request_json(TASKS_PATH, RequestOptions::post(serde_json::to_value(&payload)?))?;
    info!(title = %payload.title, project = payload.project, "created task");
    load_data(transport, state)?;
    Ok(())
}

pub fn update_task(
    transport: &dyn Transport,
    state: &mut ClientState,
    id: u64,
    values: &FormValues,
) -> Result<(), OpError> {
    let payload = TaskPayload::from_form(values)?;
    transport.request_json(&task_path(id), RequestOptions::put(serde_json::to_value(&payload)?))?;
    info!(id, "updated task");
    load_data(transport, state)?;
    Ok(())
}

/// Delete a task after confirmation. Declining touches nothing.
pub fn delete_task(
    transport: &dyn Transport,
    state: &mut ClientState,
    id: u64,
    confirm: &mut dyn Confirm,
) -> Result<Outcome, OpError> {
    if !confirm.confirm("Delete this task?") {
        return Ok(Outcome::Declined);
    }
    transport.request_json(&task_path(id), RequestOptions::delete())?;
    info!(id, "deleted task");
    load_data(transport, state)?;
    Ok(Outcome::Applied)
}
