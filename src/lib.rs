//! # Project Board Core
//!
//! Core state and interaction logic for a two-column project board.
//!
//! This crate provides the project store, form validation and drag-and-drop
//! handling without any dependency on a specific UI toolkit. Views render to
//! plain data that a front end turns into markup.

pub mod app;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use app::App;
pub use dnd::{DataTransfer, DropEffect, DropZone};
pub use domain::{
    board::{BoardConfig, Column, FormRules},
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Constraints, Validatable, Value},
};
pub use error::{ProjectError, Result};
pub use store::{ProjectStore, Snapshot};
