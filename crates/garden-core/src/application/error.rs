//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::RenderError;
use crate::error::ErrorCategory;

/// Errors that occur during the grow/reap pipelines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No garden directory in any probed location.
    #[error("no garden directory found at ./.garden or ~/.garden")]
    GardenDirNotFound,

    /// The plant's declared seed directory does not exist.
    #[error("no seed directory found at {}", path.display())]
    SeedNotFound { path: PathBuf },

    /// Filesystem operation failed (read, write, copy, remove).
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// The map document does not conform to the expected structure.
    #[error("failed to parse garden map {}: {reason}", path.display())]
    MapParse { path: PathBuf, reason: String },

    /// A template file violated the evaluation contract.
    #[error("failed to evaluate template file {}", file.display())]
    TemplateEvaluation {
        file: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An external command launched for reap failed.
    #[error("external command '{command}' failed: {reason}")]
    ExternalCommand { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GardenDirNotFound => vec![
                "Create a garden: mkdir -p .garden/seeds && touch .garden/map.yml".into(),
                "Or point at one explicitly: garden --garden-dir <DIR> ...".into(),
                "The GARDEN_DIR environment variable is honored too".into(),
            ],
            Self::SeedNotFound { path } => vec![
                format!("Expected a seed directory at {}", path.display()),
                "Check the plant's `seed` entry in map.yml".into(),
                "Seeds live under <garden>/seeds/".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Operation failed at {}", path.display()),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MapParse { path, .. } => vec![
                format!("Fix the YAML in {}", path.display()),
                "Top-level keys are `plants` and `zones`".into(),
                "Var values must be strings; quote numbers and booleans".into(),
            ],
            Self::TemplateEvaluation { file, source } => {
                let mut suggestions = vec![format!("Template file: {}", file.display())];
                match source {
                    RenderError::MissingVariable { name } => {
                        suggestions.push(format!(
                            "Define '{name}' in the plant's vars or one of its zones"
                        ));
                    }
                    RenderError::EmptyValue => {
                        suggestions
                            .push("A value piped through notEmpty resolved to \"\"".into());
                    }
                    RenderError::Engine { .. } => {
                        suggestions.push("Check the template syntax".into());
                    }
                }
                suggestions
            }
            Self::ExternalCommand { command, .. } => vec![
                format!("Command: {command}"),
                "Ensure the command is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GardenDirNotFound | Self::SeedNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::MapParse { .. } => ErrorCategory::Parse,
            Self::TemplateEvaluation { .. } => ErrorCategory::Template,
            Self::ExternalCommand { .. } => ErrorCategory::Command,
        }
    }
}
