//! Drag-and-drop plumbing between project items and board columns.

use crate::{
    domain::ProjectId,
    error::{ProjectError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Media type used to carry a project id
pub const PLAIN_TEXT: &str = "text/plain";

/// Effect the drag source permits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Payload attached to a drag operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    types: Vec<String>,
    data: HashMap<String, String>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores data under a media type, replacing any previous value
    pub fn set_data(&mut self, media_type: &str, data: &str) {
        if !self.types.iter().any(|t| t == media_type) {
            self.types.push(media_type.to_string());
        }
        self.data.insert(media_type.to_string(), data.to_string());
    }

    /// Data for a media type, or an empty string when absent
    pub fn get_data(&self, media_type: &str) -> &str {
        self.data.get(media_type).map(String::as_str).unwrap_or("")
    }

    /// Declared media types in the order they were set
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Project id carried as plain text, matched exactly as it was issued
    pub fn project_id(&self) -> Result<ProjectId> {
        let raw = self
            .data
            .get(PLAIN_TEXT)
            .ok_or(ProjectError::InvalidDragPayload)?;
        ProjectId::parse_exact(raw).map_err(|_| ProjectError::InvalidDragPayload)
    }
}

/// Visual state of a drop target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropZone {
    #[default]
    Idle,
    DragOver,
}

impl DropZone {
    /// Accepts the drag when its first declared type is plain text.
    ///
    /// Returns whether dropping is permitted.
    pub fn drag_over(&mut self, transfer: &DataTransfer) -> bool {
        let accepted = transfer.types().first().map(String::as_str) == Some(PLAIN_TEXT);
        if accepted {
            trace!(from = ?*self, "drop zone entered");
            *self = DropZone::DragOver;
        }
        accepted
    }

    pub fn drag_leave(&mut self) {
        trace!(from = ?*self, "drop zone left");
        *self = DropZone::Idle;
    }

    /// Ends the drag and hands back the dragged project id.
    ///
    /// Yields `None` unless a preceding `drag_over` permitted the drop.
    pub fn drop(&mut self, transfer: &DataTransfer) -> Result<Option<ProjectId>> {
        let permitted = self.is_droppable();
        trace!(from = ?*self, permitted, "drop zone received drop");
        *self = DropZone::Idle;
        if !permitted {
            return Ok(None);
        }
        transfer.project_id().map(Some)
    }

    /// Whether the column should be highlighted as droppable
    pub fn is_droppable(&self) -> bool {
        matches!(self, DropZone::DragOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_text(id: &str) -> DataTransfer {
        let mut transfer = DataTransfer::new();
        transfer.set_data(PLAIN_TEXT, id);
        transfer
    }

    #[test]
    fn test_data_transfer_round_trip() {
        let transfer = plain_text("PRJ3");
        assert_eq!(transfer.types(), &["text/plain".to_string()]);
        assert_eq!(transfer.get_data(PLAIN_TEXT), "PRJ3");
        assert_eq!(transfer.get_data("text/html"), "");
        assert_eq!(transfer.project_id().unwrap(), ProjectId::new(3));
    }

    #[test]
    fn test_set_data_keeps_type_order() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>x</b>");
        transfer.set_data(PLAIN_TEXT, "PRJ1");
        transfer.set_data("text/html", "<i>x</i>");

        assert_eq!(transfer.types().len(), 2);
        assert_eq!(transfer.types()[0], "text/html");
        assert_eq!(transfer.get_data("text/html"), "<i>x</i>");
    }

    #[test]
    fn test_drag_over_accepts_plain_text() {
        let mut zone = DropZone::default();
        assert!(zone.drag_over(&plain_text("PRJ1")));
        assert_eq!(zone, DropZone::DragOver);
        assert!(zone.is_droppable());
    }

    #[test]
    fn test_drag_over_ignores_other_types() {
        let mut zone = DropZone::default();
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/uri-list", "https://example.com");
        transfer.set_data(PLAIN_TEXT, "PRJ1");

        assert!(!zone.drag_over(&transfer));
        assert_eq!(zone, DropZone::Idle);

        assert!(!zone.drag_over(&DataTransfer::new()));
        assert_eq!(zone, DropZone::Idle);
    }

    #[test]
    fn test_drag_leave_returns_to_idle() {
        let mut zone = DropZone::default();
        zone.drag_over(&plain_text("PRJ1"));
        zone.drag_leave();
        assert_eq!(zone, DropZone::Idle);
    }

    #[test]
    fn test_drop_returns_to_idle() {
        let mut zone = DropZone::default();
        let transfer = plain_text("PRJ8");
        zone.drag_over(&transfer);

        assert_eq!(zone.drop(&transfer).unwrap(), Some(ProjectId::new(8)));
        assert_eq!(zone, DropZone::Idle);
    }

    #[test]
    fn test_drop_without_accepted_drag_over() {
        let mut zone = DropZone::default();
        assert_eq!(zone.drop(&plain_text("PRJ8")).unwrap(), None);

        zone.drag_over(&plain_text("PRJ8"));
        zone.drag_leave();
        assert_eq!(zone.drop(&plain_text("PRJ8")).unwrap(), None);
        assert_eq!(zone, DropZone::Idle);
    }

    #[test]
    fn test_payload_id_is_matched_exactly() {
        assert!(plain_text("prj1").project_id().is_err());
        assert!(plain_text(" PRJ1 ").project_id().is_err());
        assert_eq!(plain_text("PRJ1").project_id().unwrap(), ProjectId::new(1));
    }

    #[test]
    fn test_drop_with_bad_payload() {
        let mut zone = DropZone::DragOver;
        assert!(matches!(
            zone.drop(&plain_text("not an id")),
            Err(ProjectError::InvalidDragPayload)
        ));
        assert_eq!(zone, DropZone::Idle);

        zone = DropZone::DragOver;
        assert!(matches!(
            zone.drop(&DataTransfer::new()),
            Err(ProjectError::InvalidDragPayload)
        ));
    }
}
