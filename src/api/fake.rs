//! In-memory stand-in for the REST API, used by unit tests.

use std::cell::RefCell;

use serde_json::{Value, json};

use super::{Method, RequestError, RequestOptions, Transport};

#[derive(Debug, Default)]
struct FakeServer {
    projects: Vec<Value>,
    tasks: Vec<Value>,
    next_id: u64,
    requests: Vec<(Method, String)>,
    offline: bool,
    reject_writes: Option<String>,
}

/// Fake API that routes `/projects/` and `/tasks/` CRUD against two
/// in-memory lists and records every request it sees.
#[derive(Debug, Default)]
pub struct FakeApi {
    inner: RefCell<FakeServer>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.inner.borrow_mut().next_id = 100;
        api
    }

    /// Seed with JSON arrays of projects and tasks
    pub fn with_data(projects: Value, tasks: Value) -> Self {
        let api = Self::new();
        {
            let mut server = api.inner.borrow_mut();
            server.projects = projects.as_array().cloned().unwrap_or_default();
            server.tasks = tasks.as_array().cloned().unwrap_or_default();
        }
        api
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.inner.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.inner.borrow_mut().requests.clear();
    }

    pub fn set_offline(&self, offline: bool) {
        self.inner.borrow_mut().offline = offline;
    }

    /// Answer every POST/PUT/DELETE with a 400 carrying `message`
    pub fn reject_writes(&self, message: &str) {
        self.inner.borrow_mut().reject_writes = Some(message.to_string());
    }

    pub fn project_count(&self) -> usize {
        self.inner.borrow().projects.len()
    }

    pub fn task_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }
}

impl Transport for FakeApi {
    fn request_json(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, RequestError> {
        let mut server = self.inner.borrow_mut();
        server.requests.push((options.method, path.to_string()));
        if server.offline {
            return Err(RequestError::Transport("connection refused".into()));
        }
        if options.method != Method::Get
            && let Some(message) = &server.reject_writes
        {
            return Err(RequestError::from_status(400, message));
        }

        let mut parts = path.trim_matches('/').split('/');
        let collection = parts.next().unwrap_or_default().to_string();
        let id: Option<u64> = parts.next().and_then(|s| s.parse().ok());
        let next_id = server.next_id;
        let list = match collection.as_str() {
            "projects" => &mut server.projects,
            "tasks" => &mut server.tasks,
            _ => return Err(RequestError::from_status(404, "")),
        };
        let position = |list: &Vec<Value>, id: u64| list.iter().position(|v| v["id"] == json!(id));

        match (options.method, id) {
            (Method::Get, None) => Ok(Some(Value::Array(list.clone()))),
            (Method::Post, None) => {
                let mut body = options.body.unwrap_or_else(|| json!({}));
                body["id"] = json!(next_id);
                list.push(body.clone());
                server.next_id += 1;
                Ok(Some(body))
            }
            (Method::Put, Some(id)) => {
                let idx = position(&*list, id)
                    .ok_or_else(|| RequestError::from_status(404, r#"{"detail":"Not found."}"#))?;
                let mut body = options.body.unwrap_or_else(|| json!({}));
                body["id"] = json!(id);
                list[idx] = body.clone();
                Ok(Some(body))
            }
            (Method::Delete, Some(id)) => {
                let idx = position(&*list, id)
                    .ok_or_else(|| RequestError::from_status(404, r#"{"detail":"Not found."}"#))?;
                list.remove(idx);
                Ok(None)
            }
            _ => Err(RequestError::from_status(405, "")),
        }
    }
}
