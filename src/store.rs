//! Observable project store.
//!
//! # Invariants
//! - Records keep creation order and are never removed.
//! - Ids come from a counter that never rewinds, so they stay unique for the
//!   store's lifetime.
//! - Each mutating call runs exactly one notification round; no-op calls run
//!   none.
//! - Listeners only ever see [`Snapshot`] copies, never the live records.

use crate::domain::{Project, ProjectId, ProjectStatus};
use serde::Serialize;
use tracing::debug;

/// Callback invoked with a fresh snapshot after every mutation
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Immutable copy of the full record sequence at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    projects: Vec<Project>,
}

impl Snapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|prj| &prj.id == id)
    }

    /// Projects with the given status, in creation order
    pub fn with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|prj| prj.status == status)
            .cloned()
            .collect()
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

/// Single source of truth for the board's projects
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    next_project_number: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_project_number: 1,
        }
    }

    /// Registers a listener. It is not called until the next mutation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!(listeners = self.listeners.len(), "listener subscribed");
    }

    /// Appends a new active project and notifies listeners.
    ///
    /// Inputs are trusted; validation happens at the form boundary.
    pub fn add_project(&mut self, title: &str, description: &str, workload: f64) -> ProjectId {
        let id = self.next_project_id();
        let project = Project::new(
            id.clone(),
            title.to_string(),
            description.to_string(),
            workload,
        );
        self.projects.push(project);
        debug!(%id, title, workload, "project added");

        self.update_listeners();
        id
    }

    /// Moves a project to another status.
    ///
    /// Unknown ids and moves to the current status do nothing and notify
    /// nobody. Returns whether the project changed.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|prj| &prj.id == id) else {
            debug!(%id, "move ignored: unknown project");
            return false;
        };

        if !project.set_status(new_status) {
            debug!(%id, status = %new_status, "move ignored: status unchanged");
            return false;
        }

        debug!(%id, status = %new_status, "project moved");
        self.update_listeners();
        true
    }

    /// Copy of every project in creation order
    pub fn projects(&self) -> Snapshot {
        Snapshot {
            projects: self.projects.clone(),
        }
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|prj| &prj.id == id)
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|prj| prj.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn next_project_id(&mut self) -> ProjectId {
        let id = ProjectId::new(self.next_project_number);
        self.next_project_number += 1;
        id
    }

    fn update_listeners(&mut self) {
        let snapshot = self.projects();
        debug!(
            listeners = self.listeners.len(),
            projects = snapshot.len(),
            "notifying listeners"
        );
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .field("next_project_number", &self.next_project_number)
            .finish()
    }
}
