//! Local filesystem adapter using std::fs, walkdir and tempfile.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use garden_core::{application::ports::Filesystem, error::GardenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> GardenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_staging_dir(&self) -> GardenResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("garden-stage-")
            .tempdir()
            .map_err(|e| map_io_error(Path::new("<staging>"), e, "create staging directory"))?;
        // Removal is an explicit pipeline step, not a Drop side effect; a
        // failed grow leaves the staging dir behind for inspection.
        Ok(dir.keep())
    }

    fn mirror_contents(&self, src: &Path, dst: &Path) -> GardenResult<()> {
        std::fs::create_dir_all(dst).map_err(|e| map_io_error(dst, e, "create directory"))?;

        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry.map_err(|e| map_walk_error(src, e))?;
            let rel = entry.path().strip_prefix(src).map_err(|e| {
                map_reason(entry.path(), format!("path escapes the copy root: {e}"))
            })?;
            let target = dst.join(rel);

            let file_type = entry.file_type();
            if file_type.is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
                let metadata = entry
                    .metadata()
                    .map_err(|e| map_reason(entry.path(), format!("failed to stat: {e}")))?;
                std::fs::set_permissions(&target, metadata.permissions())
                    .map_err(|e| map_io_error(&target, e, "set permissions"))?;
            } else if file_type.is_file() {
                // fs::copy carries the permission bits along with the bytes.
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(entry.path(), e, "copy file"))?;
            } else {
                warn!(path = %entry.path().display(), "skipping non-regular file");
            }
        }

        Ok(())
    }

    fn files_with_suffix(&self, root: &Path, suffix: &str) -> GardenResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| map_walk_error(root, e))?;
            if entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(suffix))
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> GardenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GardenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_permissions(&self, from: &Path, to: &Path) -> GardenResult<()> {
        let metadata = std::fs::metadata(from).map_err(|e| map_io_error(from, e, "get metadata"))?;
        std::fs::set_permissions(to, metadata.permissions())
            .map_err(|e| map_io_error(to, e, "set permissions"))
    }

    fn remove_file(&self, path: &Path) -> GardenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> GardenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn absolutize(&self, path: &Path) -> GardenResult<PathBuf> {
        let expanded = expand_home(path);
        std::path::absolute(&expanded)
            .map_err(|e| map_io_error(&expanded, e, "resolve absolute path"))
    }
}

/// Expand a leading `~` or `~/` to the user's home directory. `~user` forms
/// and mid-path tildes pass through untouched.
fn expand_home(path: &Path) -> PathBuf {
    match path.to_str() {
        Some("~") => dirs::home_dir().unwrap_or_else(|| path.to_path_buf()),
        Some(s) if s.starts_with("~/") => match dirs::home_dir() {
            Some(home) => home.join(&s[2..]),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> garden_core::error::GardenError {
    map_reason(path, format!("failed to {operation}: {e}"))
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> garden_core::error::GardenError {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    map_reason(&path, format!("failed to walk directory: {e}"))
}

fn map_reason(path: &Path, reason: String) -> garden_core::error::GardenError {
    use garden_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
