//! Integration tests for the `tt` CLI.
//!
//! Each test starts a small in-process API on an ephemeral port, runs `tt`
//! as a subprocess against it, and checks stdout, stderr and the requests
//! the server saw.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use tempfile::TempDir;
use tiny_http::{Response, Server};

const PROJECTS: &str = r#"[
  {"id": 1, "name": "Apollo", "description": "Moonshot", "owner": 3, "members": ["ana"]},
  {"id": 2, "name": "Gemini", "description": null, "owner": null, "members": []}
]"#;

const TASKS: &str = r#"[
  {"id": 10, "title": "Launch", "description": "Count down", "status": "todo", "priority": "high", "project": 1, "due_date": "2025-07-16"},
  {"id": 11, "title": "Orbit", "description": "", "status": "in_progress", "priority": "low", "project": 2}
]"#;

type Log = Arc<Mutex<Vec<(String, String, String)>>>;

/// Start the fake API. Returns its base URL and the request log
/// (method, url, body).
fn start_api() -> (String, Log) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let method = request.method().to_string();
            let url = request.url().to_string();
            seen.lock()
                .unwrap()
                .push((method.clone(), url.clone(), body.clone()));

            let response = match (method.as_str(), url.as_str()) {
                ("GET", "/api/projects/") => Response::from_string(PROJECTS),
                ("GET", "/api/tasks/") => Response::from_string(TASKS),
                ("POST", _) | ("PUT", _) => Response::from_string(body).with_status_code(201),
                ("DELETE", _) => Response::from_string("").with_status_code(204),
                _ => Response::from_string("").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{}/api", port), log)
}

/// Run `tt` with an empty config directory and the given stdin
fn tt(args: &[&str], stdin: &str) -> Output {
    let config_home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_tt"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("TASKTRACK_API_BASE")
        .env_remove("TASKTRACK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn writes(log: &Log) -> Vec<(String, String, String)> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|(method, _, _)| method != "GET")
        .cloned()
        .collect()
}

#[test]
fn help_lists_commands() {
    let output = tt(&["--help"], "");
    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["status", "projects", "tasks", "render"] {
        assert!(out.contains(command), "missing {command} in:\n{out}");
    }
}

#[test]
fn status_reports_counts() {
    let (api, _log) = start_api();
    let output = tt(&["status", "--api", &api], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!(
            "Connected {}\n2 projects, 2 tasks (1 in progress)\nTo Do: 1  In Progress: 1  Done: 0\n",
            api
        )
    );
}

#[test]
fn status_offline_when_unreachable() {
    // Bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = format!("http://127.0.0.1:{}/api", port);
    let output = tt(&["status", "--json", "--api", &api], "");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["connected"], false);
    assert!(json.get("projects").is_none());
}

#[test]
fn projects_list_text() {
    let (api, _log) = start_api();
    let output = tt(&["projects", "--api", &api], "");
    let out = stdout(&output);
    assert!(out.contains("#1    Apollo  (owner: 3, members: 1)"));
    assert!(out.contains("#2    Gemini  (owner: Unassigned, members: 0)\n      No description"));
}

#[test]
fn tasks_json_respects_search() {
    let (api, _log) = start_api();
    let output = tt(&["tasks", "--json", "--search", "ORB", "--api", &api], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![11]);
}

#[test]
fn render_tasks_filters_by_project() {
    let (api, _log) = start_api();
    let output = tt(&["render", "tasks", "--project", "1", "--api", &api], "");
    let html = stdout(&output);
    assert!(html.contains("<option value=\"1\" selected>Apollo</option>"));
    assert!(html.contains("<strong>Launch</strong>"));
    assert!(!html.contains("Orbit"));
}

#[test]
fn rm_declined_sends_nothing() {
    let (api, log) = start_api();
    let output = tt(&["projects", "rm", "1", "--api", &api], "n\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Cancelled\n");
    assert!(stderr(&output).contains("Delete this project? [y/N]"));
    assert!(log.lock().unwrap().is_empty(), "requests: {:?}", log.lock().unwrap());
}

#[test]
fn rm_declined_while_offline_still_prompts() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = format!("http://127.0.0.1:{}/api", port);
    let output = tt(&["tasks", "rm", "10", "--api", &api], "n\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Cancelled\n");
    assert!(stderr(&output).contains("Delete this task? [y/N]"));
}

#[test]
fn rm_with_yes_deletes() {
    let (api, log) = start_api();
    let output = tt(&["tasks", "rm", "10", "--yes", "--api", &api], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Deleted task #10\n");
    // The delete goes out first, then the reload
    assert_eq!(log.lock().unwrap()[0].0, "DELETE");
    let writes = writes(&log);
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, "DELETE");
    assert_eq!(writes[0].1, "/api/tasks/10/");
}

#[test]
fn task_add_sends_full_payload() {
    let (api, log) = start_api();
    let output = tt(
        &[
            "tasks", "add", "--title", "Dock", "--project", "2", "--priority", "high", "--due",
            "2025-08-01", "--api", &api,
        ],
        "",
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let writes = writes(&log);
    assert_eq!(writes[0].0, "POST");
    assert_eq!(writes[0].1, "/api/tasks/");
    let body: serde_json::Value = serde_json::from_str(&writes[0].2).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "title": "Dock",
            "description": "",
            "status": "todo",
            "priority": "high",
            "project": 2,
            "due_date": "2025-08-01"
        })
    );
}

#[test]
fn invalid_status_is_rejected_before_sending() {
    let (api, log) = start_api();
    let output = tt(
        &["tasks", "add", "--title", "Dock", "--status", "blocked", "--api", &api],
        "",
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: invalid status 'blocked'"));
    assert!(writes(&log).is_empty());
}

#[test]
fn edit_unknown_project_fails() {
    let (api, _log) = start_api();
    let output = tt(&["projects", "edit", "99", "--name", "X", "--api", &api], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "));
}
