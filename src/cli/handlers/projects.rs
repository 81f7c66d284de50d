use crate::api::ApiClient;
use crate::cli::commands::*;
use crate::cli::output::format_projects;
use crate::form::project_form;
use crate::model::ClientState;
use crate::ops::project_ops::{create_project, delete_project, update_project};
use crate::ops::{OpError, Outcome};
use crate::render::project_cards;

use super::{CmdResult, PromptConfirm, load_state, set_field};

pub fn cmd_projects(client: &ApiClient, cmd: ProjectsCmd, json: bool) -> CmdResult {
    match cmd.action.unwrap_or(ProjectAction::List) {
        ProjectAction::List => cmd_list(client, json),
        ProjectAction::Add(args) => cmd_add(client, args),
        ProjectAction::Edit(args) => cmd_edit(client, args),
        ProjectAction::Rm(args) => cmd_rm(client, args),
    }
}

fn cmd_list(client: &ApiClient, json: bool) -> CmdResult {
    let state = load_state(client)?;
    if json {
        println!("{}", serde_json::to_string_pretty(state.projects())?);
    } else {
        print!("{}", format_projects(&project_cards(&state)));
    }
    Ok(())
}

fn cmd_add(client: &ApiClient, args: ProjectAddArgs) -> CmdResult {
    let mut state = load_state(client)?;
    let mut form = project_form(None);
    set_field(&mut form, "name", Some(args.name.clone()))?;
    set_field(&mut form, "description", Some(args.description))?;
    let mut values = form.collect();
    if let Some(owner) = args.owner {
        values.insert("owner".to_string(), owner);
    }
    create_project(client, &mut state, &values)?;
    println!("Created project \"{}\"", args.name);
    Ok(())
}

fn cmd_edit(client: &ApiClient, args: ProjectEditArgs) -> CmdResult {
    let mut state = load_state(client)?;
    let project = state.find_project(args.id).ok_or(OpError::NotFound {
        kind: "project",
        id: args.id,
    })?;
    let mut form = project_form(Some(project));
    set_field(&mut form, "name", args.name)?;
    set_field(&mut form, "description", args.description)?;
    let mut values = form.collect();
    if let Some(owner) = args.owner {
        values.insert("owner".to_string(), owner);
    }
    update_project(client, &mut state, args.id, &values)?;
    println!("Updated project #{}", args.id);
    Ok(())
}

/// Prompts before any request; the delete reloads the state itself.
fn cmd_rm(client: &ApiClient, args: RemoveArgs) -> CmdResult {
    let mut state = ClientState::new();
    let mut confirm = PromptConfirm {
        assume_yes: args.yes,
    };
    match delete_project(client, &mut state, args.id, &mut confirm)? {
        Outcome::Applied => println!("Deleted project #{}", args.id),
        Outcome::Declined => println!("Cancelled"),
    }
    Ok(())
}
