//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location)
//! 3. Built-in defaults (always present)
//!
//! # File format
//!
//! ```toml
//! [garden]
//! dir = "/srv/shared-garden"   # optional; same effect as --garden-dir
//!
//! [output]
//! no_color = false
//! ```

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Garden location settings.
    pub garden: GardenConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Garden directory to use when no `--garden-dir` flag is given.
    /// Discovery (`./.garden`, `~/.garden`) still applies when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist and parse. With `None`, the default location is read
    /// if present and silently skipped otherwise.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.is_file() {
            if required {
                anyhow::bail!("configuration file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.garden.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "garden", "garden")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".garden.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_have_no_garden_dir() {
        let cfg = AppConfig::default();
        assert!(cfg.garden.dir.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_a_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[garden]\ndir = \"/srv/shared\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.garden.dir.as_deref(), Some(std::path::Path::new("/srv/shared")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nno_color = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.garden.dir.is_none());
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/absolutely/does/not/exist.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn broken_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[garden\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
