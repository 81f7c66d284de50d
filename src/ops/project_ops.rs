use serde::Serialize;
use tracing::info;

use crate::api::{PROJECTS_PATH, RequestOptions, Transport, project_path};
use crate::form::FormValues;
use crate::model::ClientState;

use super::sync::load_data;
use super::{Confirm, OpError, Outcome, parse_id};

/// Body for `POST /projects/` and `PUT /projects/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    /// Always sent empty: members are not editable from the form
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,
}

impl ProjectPayload {
    /// Build from submitted form values. `owner` is only included when a
    /// non-empty value was supplied.
    pub fn from_form(values: &FormValues) -> Result<Self, OpError> {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        let owner = match values.get("owner").map(|s| s.trim()) {
            Some(raw) if !raw.is_empty() => Some(parse_id("owner", raw)?),
            _ => None,
        };
        Ok(ProjectPayload {
            name: field("name"),
            description: field("description"),
            members: Vec::new(),
            owner,
        })
    }
}

pub fn create_project(
    transport: &dyn Transport,
    state: &mut ClientState,
    values: &FormValues,
) -> Result<(), OpError> {
    let payload = ProjectPayload::from_form(values)?;
    transport.request_json(PROJECTS_PATH, RequestOptions::post(serde_json::to_value(&payload)?))?;
    info!(name = %payload.name, "created project");
    load_data(transport, state)?;
    Ok(())
}

pub fn update_project(
    transport: &dyn Transport,
    state: &mut ClientState,
    id: u64,
    values: &FormValues,
) -> Result<(), OpError> {
    let payload = ProjectPayload::from_form(values)?;
    transport.request_json(&project_path(id), RequestOptions::put(serde_json::to_value(&payload)?))?;
    info!(id, "updated project");
    load_data(transport, state)?;
    Ok(())
}

/// Delete a project after confirmation. Declining touches nothing.
pub fn delete_project(
    transport: &dyn Transport,
    state: &mut ClientState,
    id: u64,
    confirm: &mut dyn Confirm,
) -> Result<Outcome, OpError> {
    if !confirm.confirm("Delete this project?") {
        return Ok(Outcome::Declined);
    }
    transport.request_json(&project_path(id), RequestOptions::delete())?;
    info!(id, "deleted project");
    load_data(transport, state)?;
    Ok(Outcome::Applied)
}
