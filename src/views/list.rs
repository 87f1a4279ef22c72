use crate::{
    dnd::{DataTransfer, DropZone, PLAIN_TEXT},
    domain::{Project, ProjectId, ProjectStatus},
    error::Result,
    store::ProjectStore,
    views::{item::ItemView, Bindable, ProjectItem, View, ViewNode},
};
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, warn};

/// Rendered column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub id: String,
    pub list_id: String,
    pub heading: String,
    pub droppable: bool,
    pub items: Vec<ItemView>,
}

/// Board column showing every project with one status
pub struct ProjectList {
    status: ProjectStatus,
    heading: String,
    days_per_month: f64,
    assigned: Rc<RefCell<Vec<ProjectItem>>>,
    zone: DropZone,
}

impl ProjectList {
    pub fn new(status: ProjectStatus, heading: String, days_per_month: f64) -> Self {
        Self {
            status,
            heading,
            days_per_month,
            assigned: Rc::new(RefCell::new(Vec::new())),
            zone: DropZone::Idle,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Element id, e.g. `active-projects`
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status.as_str())
    }

    /// Inner list id, e.g. `active-projects-list`
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.as_str())
    }

    pub fn drop_zone(&self) -> DropZone {
        self.zone
    }

    /// Ids of the projects currently shown, in order
    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.assigned
            .borrow()
            .iter()
            .map(|item| item.id().clone())
            .collect()
    }

    /// Item for a project shown in this column
    pub fn item(&self, id: &ProjectId) -> Option<ProjectItem> {
        self.assigned
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.assigned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.borrow().is_empty()
    }

    pub fn drag_over_handler(&mut self, transfer: &DataTransfer) -> bool {
        self.zone.drag_over(transfer)
    }

    pub fn drag_leave_handler(&mut self) {
        self.zone.drag_leave();
    }

    /// Moves the dragged project into this column.
    ///
    /// Only acts after `drag_over_handler` accepted the drag. Returns
    /// whether the store changed.
    pub fn drop_handler(
        &mut self,
        transfer: &DataTransfer,
        store: &mut ProjectStore,
    ) -> Result<bool> {
        let dropped = self.zone.drop(transfer).map_err(|e| {
            warn!(
                column = %self.status,
                payload = transfer.get_data(PLAIN_TEXT),
                "ignoring drop: {}",
                e
            );
            e
        })?;

        match dropped {
            Some(id) => Ok(store.move_project(&id, self.status)),
            None => {
                debug!(column = %self.status, "ignoring drop: not permitted");
                Ok(false)
            }
        }
    }

    fn assign(
        assigned: &RefCell<Vec<ProjectItem>>,
        projects: &[Project],
        status: ProjectStatus,
        days_per_month: f64,
    ) {
        let mut items = assigned.borrow_mut();
        items.clear();
        items.extend(
            projects
                .iter()
                .filter(|prj| prj.status == status)
                .cloned()
                .map(|prj| ProjectItem::new(prj, days_per_month)),
        );
        debug!(column = %status, items = items.len(), "column re-rendered");
    }
}

impl Bindable for ProjectList {
    fn bind(&self, store: &mut ProjectStore) {
        let assigned = Rc::clone(&self.assigned);
        let status = self.status;
        let days_per_month = self.days_per_month;

        store.subscribe(move |snapshot| {
            Self::assign(&assigned, snapshot.as_slice(), status, days_per_month);
        });

        Self::assign(
            &self.assigned,
            store.projects().as_slice(),
            status,
            days_per_month,
        );
    }
}

impl View for ProjectList {
    fn render(&self) -> ViewNode {
        let items = self
            .assigned
            .borrow()
            .iter()
            .filter_map(|item| match item.render() {
                ViewNode::Item(view) => Some(view),
                _ => None,
            })
            .collect();

        ViewNode::List(ListView {
            id: self.element_id(),
            list_id: self.list_id(),
            heading: self.heading.clone(),
            droppable: self.zone.is_droppable(),
            items,
        })
    }
}

impl std::fmt::Debug for ProjectList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectList")
            .field("status", &self.status)
            .field("heading", &self.heading)
            .field("assigned", &self.project_ids())
            .field("zone", &self.zone)
            .finish()
    }
}
