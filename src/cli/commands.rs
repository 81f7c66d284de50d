use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::ActiveView;

#[derive(Parser)]
#[command(name = "tt", about = concat!("tasktrack v", env!("CARGO_PKG_VERSION"), " - projects and tasks from your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// API base URL (overrides TASKTRACK_API_BASE and the config file)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Read configuration from this file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the API is reachable
    Status,
    /// List, create, edit or delete projects
    Projects(ProjectsCmd),
    /// List, create, edit or delete tasks
    Tasks(TasksCmd),
    /// Print the HTML markup of a view
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectsCmd {
    #[command(subcommand)]
    pub action: Option<ProjectAction>,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects
    List,
    /// Create a project
    Add(ProjectAddArgs),
    /// Replace a project's fields (unspecified fields keep their values)
    Edit(ProjectEditArgs),
    /// Delete a project
    Rm(RemoveArgs),
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project name
    #[arg(long)]
    pub name: String,
    /// Project description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Owner user id
    #[arg(long)]
    pub owner: Option<String>,
}

#[derive(Args)]
pub struct ProjectEditArgs {
    /// Project id
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Owner user id
    #[arg(long)]
    pub owner: Option<String>,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Id to delete
    pub id: u64,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TasksCmd {
    #[command(subcommand)]
    pub action: Option<TaskAction>,

    #[command(flatten)]
    pub filter: BoardFilterArgs,
}

#[derive(Args, Default)]
pub struct BoardFilterArgs {
    /// Only tasks in this project (id, or "all")
    #[arg(long)]
    pub project: Option<String>,
    /// Only tasks whose title or description contains this text
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Show the filtered board
    List,
    /// Create a task
    Add(TaskAddArgs),
    /// Replace a task's fields (unspecified fields keep their values)
    Edit(TaskEditArgs),
    /// Delete a task
    Rm(RemoveArgs),
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task title
    #[arg(long)]
    pub title: String,
    /// Owning project id (default: first project)
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
    /// todo, in_progress or done
    #[arg(long, default_value = "todo")]
    pub status: String,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task id
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    /// Move to this project id
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    /// Due date (YYYY-MM-DD), or "" to clear
    #[arg(long)]
    pub due: Option<String>,
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct RenderArgs {
    /// View to render
    #[arg(value_enum)]
    pub view: ViewArg,

    #[command(flatten)]
    pub filter: BoardFilterArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Dashboard,
    Projects,
    Tasks,
}

impl From<ViewArg> for ActiveView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Dashboard => ActiveView::Dashboard,
            ViewArg::Projects => ActiveView::Projects,
            ViewArg::Tasks => ActiveView::Tasks,
        }
    }
}
