pub mod board;
pub mod project;
pub mod validation;

pub use board::{BoardConfig, Column, FormRules};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{coerce_number, validate, Constraints, Validatable, Value};
