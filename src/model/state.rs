use super::project::Project;
use super::task::Task;

/// Which top-level view is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Projects,
    Tasks,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Dashboard, ActiveView::Projects, ActiveView::Tasks];

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Projects => "Projects",
            ActiveView::Tasks => "Tasks",
        }
    }

    pub fn next(self) -> ActiveView {
        match self {
            ActiveView::Dashboard => ActiveView::Projects,
            ActiveView::Projects => ActiveView::Tasks,
            ActiveView::Tasks => ActiveView::Dashboard,
        }
    }
}

/// The task board's project filter: everything, or one project id.
///
/// The id is kept as the string the user picked and compared against the
/// stringified `task.project`, so a filter naming a project that no longer
/// exists simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Project(String),
}

impl ProjectFilter {
    /// Parse a select value: "all" or a project id
    pub fn from_value(value: &str) -> ProjectFilter {
        if value == "all" {
            ProjectFilter::All
        } else {
            ProjectFilter::Project(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Project(id) => id,
        }
    }
}

/// Ephemeral view state. Reset to defaults on every start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_view: ActiveView,
    pub project_filter: ProjectFilter,
    pub search_term: String,
}

/// Everything the renderers read.
///
/// Renderers take `&ClientState`; only the methods below mutate it. Server
/// data is never patched in place, only replaced by `replace_snapshot`.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    connected: bool,
    view: ViewState,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active_view(&self) -> ActiveView {
        self.view.active_view
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.view.project_filter
    }

    pub fn search_term(&self) -> &str {
        &self.view.search_term
    }

    pub fn find_project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace both server lists wholesale
    pub fn replace_snapshot(&mut self, projects: Vec<Project>, tasks: Vec<Task>) {
        self.projects = projects;
        self.tasks = tasks;
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.view.active_view = view;
    }

    pub fn set_project_filter(&mut self, filter: ProjectFilter) {
        self.view.project_filter = filter;
    }

    pub fn clear_project_filter(&mut self) {
        self.view.project_filter = ProjectFilter::All;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }
}
