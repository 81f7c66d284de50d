use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::{PROJECTS_PATH, RequestError, RequestOptions, TASKS_PATH, Transport};
use crate::model::ClientState;

/// Probe the projects endpoint and record the result in the connectivity
/// flag. Nothing else depends on the outcome.
pub fn check_api(transport: &dyn Transport, state: &mut ClientState) -> bool {
    let connected = match transport.request_json(PROJECTS_PATH, RequestOptions::get()) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "api check failed");
            false
        }
    };
    state.set_connected(connected);
    connected
}

/// GET a collection endpoint and decode it as a list
pub fn fetch_list<T: DeserializeOwned>(
    transport: &dyn Transport,
    path: &str,
) -> Result<Vec<T>, RequestError> {
    match transport.request_json(path, RequestOptions::get())? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Replace the in-memory projects and tasks with the server's current lists.
///
/// Both lists are fetched before anything is replaced, so a failure leaves
/// the previous snapshot untouched.
pub fn load_data(transport: &dyn Transport, state: &mut ClientState) -> Result<(), RequestError> {
    check_api(transport, state);
    let projects = fetch_list(transport, PROJECTS_PATH)?;
    let tasks = fetch_list(transport, TASKS_PATH)?;
    info!(projects = projects.len(), tasks = tasks.len(), "reloaded");
    state.replace_snapshot(projects, tasks);
    Ok(())
}
