//! HTTP access to the project/task REST API.
//!
//! Operations talk to the server through the [`Transport`] trait so they can
//! be exercised against an in-memory fake; [`ApiClient`] is the real
//! implementation.

pub mod client;
#[cfg(test)]
pub mod fake;

pub use client::ApiClient;

use serde_json::Value;

/// Error type for API requests.
///
/// Callers only ever get a message string; there are no structured error
/// codes beyond telling connectivity failures apart.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-2xx status
    #[error("{0}")]
    Api(String),
    /// The server could not be reached
    #[error("connection failed: {0}")]
    Transport(String),
    /// The body was not the JSON we expected
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// Build the error for a non-2xx response: the body text, or a fallback
    /// naming the status when the body is empty.
    pub fn from_status(status: u16, body: &str) -> RequestError {
        if body.is_empty() {
            RequestError::Api(format!("Request failed with {}", status))
        } else {
            RequestError::Api(body.to_string())
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, RequestError::Transport(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-request options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Extra headers, merged over the JSON content-type default
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        RequestOptions {
            method: Method::Post,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn put(body: Value) -> Self {
        RequestOptions {
            method: Method::Put,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn delete() -> Self {
        RequestOptions {
            method: Method::Delete,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Final header list: `Content-Type: application/json` unless the caller
    /// supplied their own, followed by every caller header.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        let overrides_content_type = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if !overrides_content_type {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(self.headers.iter().cloned());
        headers
    }
}

/// Something that can issue a JSON request against the API.
///
/// `Ok(None)` means the response had no body (204 No Content).
pub trait Transport {
    fn request_json(&self, path: &str, options: RequestOptions)
    -> Result<Option<Value>, RequestError>;
}

/// Join `base` and `path` with exactly one slash between them
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let suffix = path.trim_start_matches('/');
    format!("{}/{}", base, suffix)
}

/// Collection path for projects
pub const PROJECTS_PATH: &str = "/projects/";
/// Collection path for tasks
pub const TASKS_PATH: &str = "/tasks/";

pub fn project_path(id: u64) -> String {
    format!("/projects/{}/", id)
}

pub fn task_path(id: u64) -> String {
    format!("/tasks/{}/", id)
}
