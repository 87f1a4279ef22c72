use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a project (e.g., PRJ1, PRJ2, PRJ100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    const PREFIX: &'static str = "PRJ";

    /// Creates a new ProjectId from a counter
    pub fn new(counter: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Parses an id exactly as it was issued, without trimming or case folding
    pub fn parse_exact(s: &str) -> Result<Self, crate::error::ProjectError> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(crate::error::ProjectError::InvalidProjectId(s.to_string()))
        }
    }

    fn is_well_formed(s: &str) -> bool {
        s.strip_prefix(Self::PREFIX).is_some_and(|number| {
            number.chars().all(|c| c.is_ascii_digit()) && number.parse::<u64>().is_ok()
        })
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = crate::error::ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        if ProjectId::is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(crate::error::ProjectError::InvalidProjectId(s.to_string()))
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column a project currently lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses in board column order
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase name used for element and list identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = crate::error::ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(crate::error::ProjectError::InvalidStatus(s.to_string())),
        }
    }
}

/// Working days that make up one month in workload labels
pub const DEFAULT_DAYS_PER_MONTH: f64 = 20.0;

/// A project record on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Estimated effort in days
    pub workload: f64,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project
    pub fn new(id: ProjectId, title: String, description: String, workload: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            workload,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the status. Returns false when the project already has it.
    pub fn set_status(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = Utc::now();
        true
    }

    /// Workload rendered in days, or in months once it reaches a full month
    pub fn workload_label(&self) -> String {
        self.workload_label_with(DEFAULT_DAYS_PER_MONTH)
    }

    pub fn workload_label_with(&self, days_per_month: f64) -> String {
        if self.workload < days_per_month {
            format!("{} days", self.workload)
        } else {
            format!("{} months", self.workload / days_per_month)
        }
    }
}
