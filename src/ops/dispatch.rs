//! Event dispatch: every user action is an [`Event`] applied to a
//! [`Session`] as one run-to-completion transition.

use tracing::{debug, warn};

use crate::api::{RequestError, Transport};
use crate::form::{ClickTarget, FormPurpose, ModalController, project_form, task_form};
use crate::model::{ActiveView, ClientState, ProjectFilter};

use super::sync::load_data;
use super::{Confirm, OpError, project_ops, task_ops};

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShowView(ActiveView),
    Refresh,
    NewProject,
    EditProject(u64),
    DeleteProject(u64),
    NewTask,
    EditTask(u64),
    DeleteTask(u64),
    /// A project filter select value ("all" or a project id)
    SetProjectFilter(String),
    ClearProjectFilter,
    SetSearch(String),
    SubmitModal,
    CancelModal,
    ClickModal(ClickTarget),
}

/// Regions a transition invalidated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Repaint {
    pub nav: bool,
    pub dashboard: bool,
    pub projects: bool,
    pub tasks: bool,
    pub filter_options: bool,
    pub modal: bool,
}

impl Repaint {
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything derived from server data
    pub fn data() -> Self {
        Repaint {
            dashboard: true,
            projects: true,
            tasks: true,
            filter_options: true,
            ..Self::default()
        }
    }

    pub fn board() -> Self {
        Repaint {
            tasks: true,
            ..Self::default()
        }
    }

    pub fn modal() -> Self {
        Repaint {
            modal: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

/// Client state plus the modal it drives
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: ClientState,
    modal: ModalController,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    /// Direct access for front ends that edit the open form's fields
    pub fn modal_mut(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    /// First load: fetch everything and land on the dashboard
    pub fn init(&mut self, transport: &dyn Transport) -> Result<Repaint, RequestError> {
        self.state.set_active_view(ActiveView::Dashboard);
        let result = load_data(transport, &mut self.state);
        let repaint = Repaint {
            nav: true,
            ..Repaint::data()
        };
        result.map(|()| repaint)
    }

    /// Apply one event. On error the state is exactly as the server last
    /// reported it, and an open modal stays open.
    pub fn handle(
        &mut self,
        event: Event,
        transport: &dyn Transport,
        confirm: &mut dyn Confirm,
    ) -> Result<Repaint, OpError> {
        debug!(?event, "dispatch");
        match event {
            Event::ShowView(view) => {
                self.state.set_active_view(view);
                Ok(Repaint {
                    nav: true,
                    ..Repaint::none()
                })
            }
            Event::Refresh => {
                load_data(transport, &mut self.state)?;
                Ok(Repaint::data())
            }
            Event::NewProject => {
                self.modal.open(project_form(None));
                Ok(Repaint::modal())
            }
            Event::EditProject(id) => match self.state.find_project(id) {
                Some(project) => {
                    self.modal.open(project_form(Some(project)));
                    Ok(Repaint::modal())
                }
                None => {
                    warn!(id, "edit requested for unknown project");
                    Ok(Repaint::none())
                }
            },
            Event::DeleteProject(id) => {
                project_ops::delete_project(transport, &mut self.state, id, confirm)?;
                Ok(Repaint::data())
            }
            Event::NewTask => {
                self.modal
                    .open(task_form(None, self.state.projects()));
                Ok(Repaint::modal())
            }
            Event::EditTask(id) => match self.state.find_task(id) {
                Some(task) => {
                    self.modal
                        .open(task_form(Some(task), self.state.projects()));
                    Ok(Repaint::modal())
                }
                None => {
                    warn!(id, "edit requested for unknown task");
                    Ok(Repaint::none())
                }
            },
            Event::DeleteTask(id) => {
                task_ops::delete_task(transport, &mut self.state, id, confirm)?;
                Ok(Repaint::data())
            }
            Event::SetProjectFilter(value) => {
                self.state
                    .set_project_filter(ProjectFilter::from_value(&value));
                Ok(Repaint::board())
            }
            Event::ClearProjectFilter => {
                self.state.clear_project_filter();
                Ok(Repaint {
                    filter_options: true,
                    ..Repaint::board()
                })
            }
            Event::SetSearch(term) => {
                self.state.set_search_term(term);
                Ok(Repaint::board())
            }
            Event::SubmitModal => self.submit_modal(transport),
            Event::CancelModal => {
                self.modal.close();
                Ok(Repaint::modal())
            }
            Event::ClickModal(target) => {
                self.modal.click(target);
                Ok(Repaint::modal())
            }
        }
    }

    fn submit_modal(&mut self, transport: &dyn Transport) -> Result<Repaint, OpError> {
        let Some((purpose, values)) = self.modal.submit() else {
            return Ok(Repaint::none());
        };
        let state = &mut self.state;
        match purpose {
            FormPurpose::CreateProject => project_ops::create_project(transport, state, &values)?,
            FormPurpose::EditProject(id) => {
                project_ops::update_project(transport, state, id, &values)?
            }
            FormPurpose::CreateTask => task_ops::create_task(transport, state, &values)?,
            FormPurpose::EditTask(id) => task_ops::update_task(transport, state, id, &values)?,
        }
        self.modal.close();
        Ok(Repaint {
            modal: true,
            ..Repaint::data()
        })
    }
}
