//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `garden-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Staging, mirror copies, template walks
//!   - `TemplateEngine`: Template evaluation
//!   - `ProcessRunner`: External command execution for reap
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandSpec, Filesystem, ProcessRunner, RenderError, TemplateEngine};
