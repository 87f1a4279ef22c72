use crate::{
    domain::{coerce_number, FormRules, ProjectId, Validatable},
    error::{ProjectError, Result},
    store::ProjectStore,
    views::{FormView, View, ViewNode},
};
use tracing::{debug, warn};

/// Validated form values ready to become a project
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub workload: f64,
}

/// The "add project" form
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    /// Raw workload text, coerced to a number on submit
    pub workload: String,
    rules: FormRules,
}

impl ProjectInput {
    pub const ELEMENT_ID: &'static str = "user-input";

    pub fn new(rules: FormRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Fills all three fields at once
    pub fn fill(&mut self, title: &str, description: &str, workload: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
        self.workload = workload.to_string();
    }

    /// Validates the raw fields against the form rules
    pub fn gather_user_input(&self) -> Result<NewProject> {
        let workload = coerce_number(&self.workload);

        let title = Validatable::new(self.title.as_str()).required();
        if !title.is_valid() {
            return Err(ProjectError::invalid_input("title", "a title is required"));
        }

        let description = Validatable::new(self.description.as_str())
            .required()
            .min_length(self.rules.description_min_length);
        if !description.is_valid() {
            return Err(ProjectError::invalid_input(
                "description",
                format!(
                    "at least {} characters are required",
                    self.rules.description_min_length
                ),
            ));
        }

        let workload_check = Validatable::new(workload)
            .required()
            .min(self.rules.workload_min)
            .max(self.rules.workload_max);
        if !workload_check.is_valid() {
            return Err(ProjectError::invalid_input(
                "workload",
                format!(
                    "must be a number between {} and {}",
                    self.rules.workload_min, self.rules.workload_max
                ),
            ));
        }

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            workload,
        })
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.workload.clear();
    }

    /// Validates, adds the project and clears the form.
    ///
    /// On invalid input nothing is added and the fields are kept.
    pub fn submit_handler(&mut self, store: &mut ProjectStore) -> Result<ProjectId> {
        let input = self.gather_user_input().map_err(|e| {
            warn!("rejected project input: {}", e);
            e
        })?;

        self.clear_inputs();
        let id = store.add_project(&input.title, &input.description, input.workload);
        debug!(%id, "project submitted");
        Ok(id)
    }
}

impl View for ProjectInput {
    fn render(&self) -> ViewNode {
        ViewNode::Form(FormView {
            id: Self::ELEMENT_ID.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            workload: self.workload.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectStatus;

    fn form(title: &str, description: &str, workload: &str) -> ProjectInput {
        let mut input = ProjectInput::new(FormRules::default());
        input.fill(title, description, workload);
        input
    }

    fn rejected_field(input: &ProjectInput) -> String {
        match input.gather_user_input() {
            Err(ProjectError::InvalidInput { field, .. }) => field,
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_gather_valid_input() {
        let input = form("Build API", "Design the service", "40");
        let gathered = input.gather_user_input().unwrap();

        assert_eq!(
            gathered,
            NewProject {
                title: "Build API".to_string(),
                description: "Design the service".to_string(),
                workload: 40.0,
            }
        );
    }

    #[test]
    fn test_title_required() {
        assert_eq!(rejected_field(&form("  ", "Design the service", "40")), "title");
    }

    #[test]
    fn test_description_min_length() {
        assert_eq!(rejected_field(&form("Build API", "abcd", "40")), "description");
        assert!(form("Build API", "abcde", "40").gather_user_input().is_ok());
    }

    #[test]
    fn test_workload_bounds() {
        assert_eq!(rejected_field(&form("A", "Design it", "")), "workload");
        assert_eq!(rejected_field(&form("A", "Design it", "0")), "workload");
        assert_eq!(rejected_field(&form("A", "Design it", "1001")), "workload");
        assert_eq!(rejected_field(&form("A", "Design it", "lots")), "workload");
        assert!(form("A", "Design it", "1").gather_user_input().is_ok());
        assert!(form("A", "Design it", "1000").gather_user_input().is_ok());
    }

    #[test]
    fn test_custom_rules() {
        let mut input = ProjectInput::new(FormRules {
            description_min_length: 2,
            workload_min: 1.0,
            workload_max: 10.0,
        });
        input.fill("A", "ok", "11");
        assert_eq!(rejected_field(&input), "workload");
    }

    #[test]
    fn test_submit_adds_and_clears() {
        let mut store = ProjectStore::new();
        let mut input = form("Build API", "Design the service", "40");

        let id = input.submit_handler(&mut store).unwrap();

        let project = store.get(&id).unwrap();
        assert_eq!(project.title, "Build API");
        assert_eq!(project.workload, 40.0);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(input.title.is_empty());
        assert!(input.description.is_empty());
        assert!(input.workload.is_empty());
    }

    #[test]
    fn test_submit_invalid_keeps_fields() {
        let mut store = ProjectStore::new();
        let mut input = form("Build API", "tiny", "40");

        assert!(input.submit_handler(&mut store).is_err());

        assert!(store.is_empty());
        assert_eq!(input.description, "tiny");
    }

    #[test]
    fn test_render() {
        let input = form("Build API", "", "4");
        let ViewNode::Form(view) = input.render() else {
            panic!("expected a form node");
        };
        assert_eq!(view.id, "user-input");
        assert_eq!(view.title, "Build API");
        assert_eq!(view.workload, "4");
    }
}
