mod projects;
mod tasks;

use std::io::{self, BufRead, Write};

use crate::api::ApiClient;
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::form::ModalForm;
use crate::model::{ActiveView, ClientState, ProjectFilter};
use crate::ops::Confirm;
use crate::ops::sync::{check_api, load_data};
use crate::render::{dashboard_metrics, html};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, client: &ApiClient, json: bool) -> CmdResult {
    match command {
        Commands::Status => cmd_status(client, json),
        Commands::Projects(cmd) => projects::cmd_projects(client, cmd, json),
        Commands::Tasks(cmd) => tasks::cmd_tasks(client, cmd, json),
        Commands::Render(args) => cmd_render(client, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fresh state loaded from the API
fn load_state(client: &ApiClient) -> Result<ClientState, Box<dyn std::error::Error>> {
    let mut state = ClientState::new();
    load_data(client, &mut state)?;
    Ok(state)
}

fn apply_filter(state: &mut ClientState, filter: &BoardFilterArgs) {
    if let Some(project) = &filter.project {
        state.set_project_filter(ProjectFilter::from_value(project));
    }
    if let Some(term) = &filter.search {
        state.set_search_term(term.clone());
    }
}

/// Set a form field from a command-line flag, rejecting values a select
/// would not offer.
fn set_field(form: &mut ModalForm, name: &str, value: Option<String>) -> CmdResult {
    let Some(value) = value else {
        return Ok(());
    };
    if form.set_value(name, value.clone()) {
        return Ok(());
    }
    let allowed: Vec<&str> = form
        .fields()
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.options().iter().map(|o| o.value.as_str()).collect())
        .unwrap_or_default();
    Err(format!(
        "invalid {} '{}' (expected one of: {})",
        name,
        value,
        allowed.join(", ")
    )
    .into())
}

/// Confirmation for destructive commands: `--yes`, or a prompt on stderr
pub struct PromptConfirm {
    pub assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_status(client: &ApiClient, json: bool) -> CmdResult {
    let mut state = ClientState::new();
    let connected = check_api(client, &mut state);
    let metrics = if connected {
        load_data(client, &mut state)?;
        Some(dashboard_metrics(&state))
    } else {
        None
    };

    if json {
        let out = StatusJson {
            api: client.base_url(),
            connected,
            projects: metrics.as_ref().map(|m| m.total_projects),
            tasks: metrics.as_ref().map(|m| m.total_tasks),
            in_progress: metrics.as_ref().map(|m| m.in_progress),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_status(client.base_url(), connected, metrics.as_ref()));
    }
    Ok(())
}

fn cmd_render(client: &ApiClient, args: RenderArgs) -> CmdResult {
    let mut state = load_state(client)?;
    state.set_active_view(ActiveView::from(args.view));
    apply_filter(&mut state, &args.filter);
    print!("{}", html::view_html(&state));
    Ok(())
}
