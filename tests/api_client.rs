//! Integration tests for `ApiClient` against a local HTTP server.
//!
//! Each test starts a `tiny_http` server on an ephemeral port, answers a
//! fixed number of requests from a script, and records what it received.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use serde_json::json;
use tasktrack::api::{ApiClient, RequestError, RequestOptions, Transport};
use tiny_http::{Response, Server};

#[derive(Debug)]
struct Received {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: String,
}

/// Start a server that answers each request with the next `(status, body)`.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<Received>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let mut request = match server.recv() {
                Ok(r) => r,
                Err(_) => return,
            };
            let mut text = String::new();
            request.as_reader().read_to_string(&mut text).unwrap();
            let headers = request
                .headers()
                .iter()
                .map(|h| (h.field.to_string(), h.value.to_string()))
                .collect();
            tx.send(Received {
                method: request.method().to_string(),
                url: request.url().to_string(),
                headers,
                body: text,
            })
            .unwrap();
            let response = if status == 204 {
                Response::from_string("").with_status_code(204)
            } else {
                Response::from_string(body).with_status_code(status)
            };
            request.respond(response).unwrap();
        }
    });

    (format!("http://127.0.0.1:{}/api/", port), rx)
}

fn header<'a>(received: &'a Received, name: &str) -> Option<&'a str> {
    received
        .headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[test]
fn get_parses_json_and_joins_url() {
    let (base, rx) = serve(vec![(200, r#"[{"id": 1, "name": "Apollo"}]"#)]);
    let client = ApiClient::new(base, None).unwrap();

    let value = client.request_json("/projects/", RequestOptions::get()).unwrap();
    assert_eq!(value, Some(json!([{"id": 1, "name": "Apollo"}])));

    let received = rx.recv().unwrap();
    assert_eq!(received.method, "GET");
    assert_eq!(received.url, "/api/projects/");
    assert_eq!(header(&received, "content-type"), Some("application/json"));
}

#[test]
fn post_sends_json_body_and_caller_headers() {
    let (base, rx) = serve(vec![(201, r#"{"id": 7, "name": "New"}"#)]);
    let client = ApiClient::new(base, None).unwrap();

    let options = RequestOptions::post(json!({"name": "New", "members": []}))
        .with_header("X-Request-Id", "abc123");
    let value = client.request_json("projects/", options).unwrap();
    assert_eq!(value.unwrap()["id"], 7);

    let received = rx.recv().unwrap();
    assert_eq!(received.method, "POST");
    assert_eq!(header(&received, "x-request-id"), Some("abc123"));
    assert_eq!(header(&received, "content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&received.body).unwrap();
    assert_eq!(body, json!({"name": "New", "members": []}));
}

#[test]
fn no_content_yields_none() {
    let (base, rx) = serve(vec![(204, "")]);
    let client = ApiClient::new(base, None).unwrap();

    let value = client
        .request_json("/tasks/3/", RequestOptions::delete())
        .unwrap();
    assert_eq!(value, None);
    assert_eq!(rx.recv().unwrap().method, "DELETE");
}

#[test]
fn error_status_carries_body_text() {
    let (base, _rx) = serve(vec![(400, r#"{"project":["This field is required."]}"#)]);
    let client = ApiClient::new(base, None).unwrap();

    let err = client
        .request_json("/tasks/", RequestOptions::post(json!({})))
        .unwrap_err();
    assert!(matches!(err, RequestError::Api(_)));
    assert_eq!(err.to_string(), r#"{"project":["This field is required."]}"#);
}

#[test]
fn error_status_without_body_names_the_status() {
    let (base, _rx) = serve(vec![(500, "")]);
    let client = ApiClient::new(base, None).unwrap();

    let err = client.request_json("/tasks/", RequestOptions::get()).unwrap_err();
    assert_eq!(err.to_string(), "Request failed with 500");
}

#[test]
fn unreachable_server_is_a_connectivity_error() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(format!("http://127.0.0.1:{}/api", port), None).unwrap();

    let err = client.request_json("/projects/", RequestOptions::get()).unwrap_err();
    assert!(err.is_connectivity());
}
