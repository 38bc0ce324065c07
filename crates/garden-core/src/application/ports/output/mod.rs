//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `garden-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::TemplateInventory;
use crate::error::GardenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `garden_adapters::filesystem::LocalFilesystem` (production)
///
/// ## Design Notes
///
/// - Staging directories are created by the adapter so that unique naming
///   stays an infrastructure concern
/// - Mirror copies preserve permission bits; the grow pipeline relies on
///   that for executable template output
/// - `absolutize` never requires the path to exist (a freshly grown plant's
///   destination usually does not, yet)
pub trait Filesystem: Send + Sync {
    /// Check that a path exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GardenResult<()>;

    /// Create a fresh, uniquely named temporary staging directory.
    fn create_staging_dir(&self) -> GardenResult<PathBuf>;

    /// Copy the contents of `src` into `dst` mirror-fashion (the `src`
    /// directory itself is not nested inside `dst`), preserving directory
    /// structure and permission bits. Existing files in `dst` are
    /// overwritten.
    fn mirror_contents(&self, src: &Path, dst: &Path) -> GardenResult<()>;

    /// Every regular file under `root` whose name ends in `suffix`.
    fn files_with_suffix(&self, root: &Path, suffix: &str) -> GardenResult<Vec<PathBuf>>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> GardenResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> GardenResult<()>;

    /// Copy permission bits from one file to another.
    fn copy_permissions(&self, from: &Path, to: &Path) -> GardenResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GardenResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GardenResult<()>;

    /// Resolve to an absolute path, expanding a leading `~`, without
    /// requiring the path to exist.
    fn absolutize(&self, path: &Path) -> GardenResult<PathBuf>;
}

/// Port for template evaluation.
///
/// Implemented by:
/// - `garden_adapters::renderer::TeraEngine` (production)
///
/// The engine exposes the inventory as the template context (`plant_id`,
/// `plant_path`, `vars.<KEY>`) plus the `var` / `notEmpty` / `isOne`
/// extensions.
pub trait TemplateEngine: Send + Sync {
    /// Evaluate one template's entire content against the inventory.
    fn render(&self, content: &str, inventory: &TemplateInventory) -> Result<String, RenderError>;
}

/// Template-contract violations and engine failures during evaluation.
///
/// `MissingVariable` and `EmptyValue` are the two contract errors a seed
/// author can trigger; everything else the engine rejects collapses into
/// `Engine`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// `var(name=...)` referenced a name the inventory does not bind.
    #[error("no value found for variable '{name}'")]
    MissingVariable { name: String },

    /// `notEmpty` was handed an empty string.
    #[error("required value is empty")]
    EmptyValue,

    /// Anything else the engine rejected (syntax errors, bad arguments).
    #[error("template engine error: {message}")]
    Engine { message: String },
}

/// An external command to run for reap: program, arguments, and the
/// environment pairs injected on top of the parent environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Port for external command execution.
///
/// Implemented by:
/// - `garden_adapters::process::LocalProcessRunner` (production)
/// - recording fakes in tests (nothing is spawned)
pub trait ProcessRunner: Send + Sync {
    /// Run the command with inherited stdio. `Err` on launch failure or a
    /// non-zero exit.
    fn run(&self, spec: &CommandSpec) -> GardenResult<()>;
}
