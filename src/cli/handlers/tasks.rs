use crate::api::ApiClient;
use crate::cli::commands::*;
use crate::cli::output::{board_tasks_json, format_board};
use crate::form::task_form;
use crate::model::ClientState;
use crate::ops::task_ops::{create_task, delete_task, update_task};
use crate::ops::{OpError, Outcome};
use crate::render::task_board;

use super::{CmdResult, PromptConfirm, apply_filter, load_state, set_field};

pub fn cmd_tasks(client: &ApiClient, cmd: TasksCmd, json: bool) -> CmdResult {
    match cmd.action.unwrap_or(TaskAction::List) {
        TaskAction::List => cmd_list(client, &cmd.filter, json),
        TaskAction::Add(args) => cmd_add(client, args),
        TaskAction::Edit(args) => cmd_edit(client, args),
        TaskAction::Rm(args) => cmd_rm(client, args),
    }
}

fn cmd_list(client: &ApiClient, filter: &BoardFilterArgs, json: bool) -> CmdResult {
    let mut state = load_state(client)?;
    apply_filter(&mut state, filter);
    if json {
        println!("{}", board_tasks_json(&state)?);
    } else {
        print!("{}", format_board(&task_board(&state)));
    }
    Ok(())
}

fn cmd_add(client: &ApiClient, args: TaskAddArgs) -> CmdResult {
    let mut state = load_state(client)?;
    let mut form = task_form(None, state.projects());
    set_field(&mut form, "title", Some(args.title.clone()))?;
    set_field(&mut form, "description", Some(args.description))?;
    set_field(&mut form, "status", Some(args.status))?;
    set_field(&mut form, "priority", Some(args.priority))?;
    set_field(&mut form, "project", args.project)?;
    set_field(&mut form, "due_date", args.due)?;
    create_task(client, &mut state, &form.collect())?;
    println!("Created task \"{}\"", args.title);
    Ok(())
}

fn cmd_edit(client: &ApiClient, args: TaskEditArgs) -> CmdResult {
    let mut state = load_state(client)?;
    let task = state.find_task(args.id).ok_or(OpError::NotFound {
        kind: "task",
        id: args.id,
    })?;
    let mut form = task_form(Some(task), state.projects());
    set_field(&mut form, "title", args.title)?;
    set_field(&mut form, "description", args.description)?;
    set_field(&mut form, "status", args.status)?;
    set_field(&mut form, "priority", args.priority)?;
    set_field(&mut form, "project", args.project)?;
    set_field(&mut form, "due_date", args.due)?;
    update_task(client, &mut state, args.id, &form.collect())?;
    println!("Updated task #{}", args.id);
    Ok(())
}

/// Prompts before any request; the delete reloads the state itself.
fn cmd_rm(client: &ApiClient, args: RemoveArgs) -> CmdResult {
    let mut state = ClientState::new();
    let mut confirm = PromptConfirm {
        assume_yes: args.yes,
    };
    match delete_task(client, &mut state, args.id, &mut confirm)? {
        Outcome::Applied => println!("Deleted task #{}", args.id),
        Outcome::Declined => println!("Cancelled"),
    }
    Ok(())
}
