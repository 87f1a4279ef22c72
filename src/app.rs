//! Composition root wiring the store to the form and the board columns.

use crate::{
    dnd::DataTransfer,
    domain::{BoardConfig, ProjectId, ProjectStatus},
    error::Result,
    store::ProjectStore,
    views::{attach, Bindable, Host, InsertPosition, ProjectInput, ProjectList, View},
};
use tracing::{debug, info};

/// A fully wired project board
#[derive(Debug)]
pub struct App {
    config: BoardConfig,
    store: ProjectStore,
    input: ProjectInput,
    lists: Vec<ProjectList>,
}

impl App {
    pub const HOST_ID: &'static str = "app";

    /// Builds the board and binds every column before any project exists
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let mut store = ProjectStore::new();
        let input = ProjectInput::new(config.form.clone());
        let lists: Vec<ProjectList> = ProjectStatus::ALL
            .iter()
            .map(|status| {
                ProjectList::new(
                    *status,
                    config.heading_for_status(status),
                    config.days_per_month,
                )
            })
            .collect();

        for list in &lists {
            list.bind(&mut store);
        }

        info!(board = %config.name, columns = lists.len(), "board initialized");
        Ok(Self {
            config,
            store,
            input,
            lists,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Submits whatever is currently in the form
    pub fn submit(&mut self) -> Result<ProjectId> {
        self.input.submit_handler(&mut self.store)
    }

    /// Drags a project from whichever column shows it onto the target column.
    ///
    /// Returns whether the project changed columns.
    pub fn drag_project(&mut self, id: &ProjectId, target: ProjectStatus) -> Result<bool> {
        let mut transfer = DataTransfer::new();

        let source = self.lists.iter().find_map(|list| list.item(id));
        match &source {
            Some(item) => item.drag_start(&mut transfer),
            None => debug!(%id, "dragged project is not on the board"),
        }

        let moved = match self.lists.iter_mut().find(|list| list.status() == target) {
            Some(list) => {
                if list.drag_over_handler(&transfer) {
                    list.drop_handler(&transfer, &mut self.store)?
                } else {
                    list.drag_leave_handler();
                    false
                }
            }
            None => false,
        };

        if let Some(item) = &source {
            item.drag_end(&transfer);
        }
        Ok(moved)
    }

    /// Renders the form followed by every column
    pub fn render(&self) -> Host {
        let mut host = Host::new(Self::HOST_ID);
        for list in &self.lists {
            attach(&mut host, list.render(), InsertPosition::BeforeEnd);
        }
        attach(&mut host, self.input.render(), InsertPosition::AfterBegin);
        host
    }
}
