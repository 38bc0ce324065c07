//! Application layer for garden.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GrowService, ReapService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GrowService, ReapService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandSpec, Filesystem, ProcessRunner, RenderError, TemplateEngine};

pub use error::ApplicationError;
