//! UI-agnostic view components.
//!
//! Each component renders to a plain [`ViewNode`] that a front end turns into
//! markup. Components that follow the store implement [`Bindable`]; the
//! shared attach step lives in [`attach`].

use crate::store::ProjectStore;
use serde::Serialize;

pub mod input;
pub mod item;
pub mod list;

pub use input::{NewProject, ProjectInput};
pub use item::{ItemView, ProjectItem};
pub use list::{ListView, ProjectList};

/// Anything that can produce a rendered node
pub trait View {
    fn render(&self) -> ViewNode;
}

/// Views that follow store changes
pub trait Bindable {
    /// Subscribes to the store and seeds the view with its current state
    fn bind(&self, store: &mut ProjectStore);
}

/// Rendered output of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewNode {
    Form(FormView),
    List(ListView),
    Item(ItemView),
}

/// Current contents of the project form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub workload: String,
}

/// Where a node goes inside its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// Container that rendered nodes are attached to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Host {
    pub id: String,
    pub children: Vec<ViewNode>,
}

impl Host {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }
}

/// Inserts a rendered node at the start or end of the host
pub fn attach(host: &mut Host, node: ViewNode, position: InsertPosition) {
    match position {
        InsertPosition::AfterBegin => host.children.insert(0, node),
        InsertPosition::BeforeEnd => host.children.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str) -> ViewNode {
        ViewNode::Form(FormView {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            workload: String::new(),
        })
    }

    #[test]
    fn test_attach_positions() {
        let mut host = Host::new("app");
        attach(&mut host, form("b"), InsertPosition::BeforeEnd);
        attach(&mut host, form("c"), InsertPosition::BeforeEnd);
        attach(&mut host, form("a"), InsertPosition::AfterBegin);

        let ids: Vec<&str> = host
            .children
            .iter()
            .map(|node| match node {
                ViewNode::Form(f) => f.id.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_view_node_serialization() {
        let json = serde_json::to_value(form("user-input")).unwrap();
        assert_eq!(json["kind"], "form");
        assert_eq!(json["id"], "user-input");
    }
}
