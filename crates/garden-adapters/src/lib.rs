//! Infrastructure adapters for garden.
//!
//! This crate implements the ports defined in `garden_core::application::ports`
//! with real infrastructure: the local filesystem, the tera template engine
//! and child process execution. It also owns garden discovery and map
//! document loading, which sit outside the core because they touch the
//! filesystem and the YAML parser directly.

pub mod filesystem;
pub mod map_loader;
pub mod process;
pub mod renderer;

// Re-export the production adapters
pub use filesystem::LocalFilesystem;
pub use process::LocalProcessRunner;
pub use renderer::TeraEngine;
