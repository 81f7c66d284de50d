use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Method, RequestError, RequestOptions, Transport, build_url};
use crate::model::ApiConfig;

/// Blocking JSON client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client. `timeout` of `None` lets requests wait forever.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok(ApiClient {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, RequestError> {
        Self::new(api.base_url.clone(), api.timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ApiClient {
    fn request_json(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, RequestError> {
        let url = self.url_for(path);
        debug!(method = options.method.as_str(), %url, "api request");

        let mut request = self.http.request(reqwest_method(options.method), &url);
        for (name, value) in options.merged_headers() {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().map_err(|e| {
            warn!(%url, error = %e, "api unreachable");
            RequestError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            warn!(%url, status = status.as_u16(), "api returned error status");
            return Err(RequestError::from_status(status.as_u16(), &text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response
            .text()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }
}
