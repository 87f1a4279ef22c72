use crate::{
    domain::project::{ProjectStatus, DEFAULT_DAYS_PER_MONTH},
    error::{ProjectError, Result},
};
use serde::{Deserialize, Serialize};

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub heading: String,
    pub status: ProjectStatus,
}

impl Column {
    pub fn new(heading: String, status: ProjectStatus) -> Self {
        Self { heading, status }
    }
}

/// Limits applied to the project form before a project is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub description_min_length: usize,
    pub workload_min: f64,
    pub workload_max: f64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            workload_min: 1.0,
            workload_max: 1000.0,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    pub form: FormRules,
    pub days_per_month: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Projects".to_string(),
            columns: vec![
                Column::new("Active Projects".to_string(), ProjectStatus::Active),
                Column::new("Finished Projects".to_string(), ProjectStatus::Finished),
            ],
            form: FormRules::default(),
            days_per_month: DEFAULT_DAYS_PER_MONTH,
        }
    }
}

impl BoardConfig {
    /// Loads a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every status has a column and the form limits make sense
    pub fn validate(&self) -> Result<()> {
        for status in ProjectStatus::ALL {
            if self.get_column_for_status(&status).is_none() {
                return Err(ProjectError::ConfigError(format!(
                    "no column configured for status {}",
                    status
                )));
            }
        }

        if self.form.workload_min > self.form.workload_max {
            return Err(ProjectError::ConfigError(format!(
                "workload_min {} exceeds workload_max {}",
                self.form.workload_min, self.form.workload_max
            )));
        }

        if self.days_per_month.is_nan() || self.days_per_month <= 0.0 {
            return Err(ProjectError::ConfigError(format!(
                "days_per_month must be positive, got {}",
                self.days_per_month
            )));
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn get_column_for_status(&self, status: &ProjectStatus) -> Option<&Column> {
        self.columns.iter().find(|col| &col.status == status)
    }

    /// Heading shown above the column for a status
    pub fn heading_for_status(&self, status: &ProjectStatus) -> String {
        self.get_column_for_status(status)
            .map(|col| col.heading.clone())
            .unwrap_or_else(|| status.to_string())
    }
}
