use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// The garden domain is lookup-only. Unknown zone references are tolerated
/// and absent fields default to empty, so the only failure it can produce
/// is a missing plant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no plant found with id '{id}'")]
    PlantNotFound { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PlantNotFound { id } => vec![
                format!("No plant with id '{id}' is declared in map.yml"),
                "List declared plants: garden view".into(),
                "Check the spelling of --plant".into(),
            ],
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PlantNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
