//! Unified error handling for Garden Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors and classifies every failure into one of the
//! taxonomy categories the CLI maps to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for garden-core operations.
///
/// This enum wraps all possible errors that can occur when using
/// garden-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GardenError {
    /// Errors from the domain layer (map lookups).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GardenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
///
/// One category per taxonomy family; the CLI owns the mapping to exit
/// codes and suggestion text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A named thing (garden directory, plant, seed) does not exist.
    NotFound,
    /// File read/write/copy failure.
    Io,
    /// Malformed map document.
    Parse,
    /// Template evaluation contract violation.
    Template,
    /// External command launch failure or non-zero exit.
    Command,
}

/// Convenient result type alias.
pub type GardenResult<T> = Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: GardenError = DomainError::PlantNotFound { id: "p".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn transparent_display_carries_inner_message() {
        let err: GardenError = DomainError::PlantNotFound { id: "fern".into() }.into();
        assert_eq!(err.to_string(), "no plant found with id 'fern'");
    }

    #[test]
    fn suggestions_delegate_to_the_wrapped_error() {
        let err: GardenError = ApplicationError::GardenDirNotFound.into();
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("--garden-dir"))
        );
    }
}
