use crate::{
    dnd::{DataTransfer, DropEffect, PLAIN_TEXT},
    domain::{Project, ProjectId},
    views::{View, ViewNode},
};
use serde::Serialize;
use tracing::trace;

/// Rendered project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub workload: String,
    pub description: String,
    pub draggable: bool,
}

/// A single project card and drag source
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    project: Project,
    days_per_month: f64,
}

impl ProjectItem {
    pub fn new(project: Project, days_per_month: f64) -> Self {
        Self {
            project,
            days_per_month,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn workload_label(&self) -> String {
        self.project.workload_label_with(self.days_per_month)
    }

    /// Puts the project id on the drag payload and allows only moving
    pub fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PLAIN_TEXT, self.project.id.as_str());
        transfer.effect_allowed = DropEffect::Move;
        trace!(id = %self.project.id, "drag started");
    }

    pub fn drag_end(&self, _transfer: &DataTransfer) {
        trace!(id = %self.project.id, "drag ended");
    }
}

impl View for ProjectItem {
    fn render(&self) -> ViewNode {
        ViewNode::Item(ItemView {
            id: self.project.id.to_string(),
            title: self.project.title.clone(),
            workload: self.workload_label(),
            description: self.project.description.clone(),
            draggable: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(workload: f64) -> ProjectItem {
        let project = Project::new(
            ProjectId::new(5),
            "Build API".to_string(),
            "Design the service".to_string(),
            workload,
        );
        ProjectItem::new(project, 20.0)
    }

    #[test]
    fn test_drag_start_sets_payload() {
        let mut transfer = DataTransfer::new();
        item(3.0).drag_start(&mut transfer);

        assert_eq!(transfer.get_data(PLAIN_TEXT), "PRJ5");
        assert_eq!(transfer.types()[0], PLAIN_TEXT);
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(transfer.project_id().unwrap(), ProjectId::new(5));
    }

    #[test]
    fn test_render() {
        let ViewNode::Item(view) = item(3.0).render() else {
            panic!("expected an item node");
        };
        assert_eq!(view.id, "PRJ5");
        assert_eq!(view.title, "Build API");
        assert_eq!(view.workload, "3 days");
        assert_eq!(view.description, "Design the service");
        assert!(view.draggable);
    }

    #[test]
    fn test_render_months() {
        let ViewNode::Item(view) = item(60.0).render() else {
            panic!("expected an item node");
        };
        assert_eq!(view.workload, "3 months");
    }
}
