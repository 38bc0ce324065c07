//! Garden discovery and map document loading.
//!
//! Discovery probes fixed locations in priority order: `.garden` under the
//! current working directory, then `.garden` under the user's home
//! directory. An explicitly supplied directory bypasses discovery entirely.
//!
//! # `map.yml` format
//!
//! ```yaml
//! plants:
//!   api-prod:
//!     path: ~/deployments/$_GARDEN_PLANT_ID
//!     seed: services/api
//!     zones: [backend, production]
//!     vars:
//!       PORT: "8443"
//!
//! zones:
//!   backend:
//!     vars:
//!       LANG: go
//!   production:
//!     vars:
//!       DEBUG: "false"
//! ```
//!
//! Loading is lenient: both top-level sections are optional, an empty
//! document is a valid empty garden, and unknown keys are ignored. Only a
//! structurally broken document (bad YAML, wrong value shapes) is an error.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use garden_core::{
    application::ApplicationError,
    domain::{GardenMap, layout},
    error::GardenResult,
};

/// Locate the garden directory by probing the fixed locations.
///
/// Returns the first of `./.garden` and `~/.garden` that exists as a
/// directory, absolutized so later chdir-sensitive operations see a stable
/// path.
///
/// # Errors
///
/// [`ApplicationError::GardenDirNotFound`] when neither location exists.
pub fn find_garden_dir() -> GardenResult<PathBuf> {
    find_garden_dir_in(Path::new("."), dirs::home_dir())
}

/// Resolve the garden directory to use: an explicit path wins over
/// discovery.
///
/// The explicit path is absolutized but not checked for existence; a
/// missing directory surfaces as a read error from [`load_garden_map`].
pub fn resolve_garden_dir(explicit: Option<&Path>) -> GardenResult<PathBuf> {
    match explicit {
        Some(dir) => absolutize(dir),
        None => find_garden_dir(),
    }
}

/// Read and parse the map document of a garden directory.
#[instrument(skip_all, fields(garden = %garden_dir.display()))]
pub fn load_garden_map(garden_dir: &Path) -> GardenResult<GardenMap> {
    let path = layout::map_path(garden_dir);
    let content = std::fs::read_to_string(&path).map_err(|e| ApplicationError::Filesystem {
        path: path.clone(),
        reason: format!("failed to read map document: {e}"),
    })?;

    // An empty or null document is a valid, empty garden.
    let map: Option<GardenMap> =
        serde_yaml::from_str(&content).map_err(|e| ApplicationError::MapParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    let map = map.unwrap_or_default();

    debug!(
        plants = map.plants.len(),
        zones = map.zones.len(),
        "loaded garden map"
    );
    Ok(map)
}

/// Resolve the garden directory and load its map in one step.
pub fn open_garden(explicit: Option<&Path>) -> GardenResult<(PathBuf, GardenMap)> {
    let garden_dir = resolve_garden_dir(explicit)?;
    let map = load_garden_map(&garden_dir)?;
    Ok((garden_dir, map))
}

/// Probe `cwd` then `home` for a garden directory. Split out from
/// [`find_garden_dir`] so the probe order is testable without touching the
/// process working directory.
fn find_garden_dir_in(cwd: &Path, home: Option<PathBuf>) -> GardenResult<PathBuf> {
    let local = cwd.join(layout::GARDEN_DIR_NAME);
    if local.is_dir() {
        return absolutize(&local);
    }

    if let Some(home) = home {
        let global = home.join(layout::GARDEN_DIR_NAME);
        if global.is_dir() {
            return Ok(global);
        }
    }

    Err(ApplicationError::GardenDirNotFound.into())
}

fn absolutize(path: &Path) -> GardenResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: format!("failed to resolve absolute path: {e}"),
        }
        .into()
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::error::{ErrorCategory, GardenError};
    use std::fs;
    use tempfile::TempDir;

    /// Write `content` as the map document of a fresh garden directory.
    fn make_garden(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(layout::MAP_FILE), content).unwrap();
        temp
    }

    const FULL_MAP: &str = r#"
plants:
  api-prod:
    path: /srv/$_GARDEN_PLANT_ID
    seed: services/api
    zones: [backend, production]
    vars:
      PORT: "8443"

zones:
  backend:
    vars:
      LANG: go
  production:
    vars:
      DEBUG: "false"
"#;

    // ── load_garden_map ───────────────────────────────────────────────────

    #[test]
    fn loads_plants_and_zones() {
        let garden = make_garden(FULL_MAP);
        let map = load_garden_map(garden.path()).unwrap();

        let plant = map.plant("api-prod").unwrap();
        assert_eq!(plant.path, "/srv/$_GARDEN_PLANT_ID");
        assert_eq!(plant.seed, "services/api");
        assert_eq!(plant.zones, vec!["backend", "production"]);
        assert_eq!(plant.vars.get("PORT").map(String::as_str), Some("8443"));
        assert_eq!(
            map.zones["backend"].vars.get("LANG").map(String::as_str),
            Some("go")
        );
    }

    #[test]
    fn empty_document_is_an_empty_garden() {
        let garden = make_garden("");
        let map = load_garden_map(garden.path()).unwrap();
        assert!(map.plants.is_empty());
        assert!(map.zones.is_empty());
    }

    #[test]
    fn null_sections_are_empty() {
        let garden = make_garden("plants:\nzones:\n");
        let map = load_garden_map(garden.path()).unwrap();
        assert!(map.plants.is_empty());
        assert!(map.zones.is_empty());
    }

    #[test]
    fn duplicate_plant_ids_last_definition_wins() {
        let garden = make_garden(
            r#"
plants:
  web:
    path: /srv/first
    seed: old
  web:
    path: /srv/second
    seed: new
"#,
        );
        let map = load_garden_map(garden.path()).unwrap();
        assert_eq!(map.plants.len(), 1);
        assert_eq!(map.plants["web"].path, "/srv/second");
        assert_eq!(map.plants["web"].seed, "new");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let garden = make_garden(
            r#"
version: 3
plants:
  web:
    path: /srv/web
    seed: web
    owner: alice
"#,
        );
        let map = load_garden_map(garden.path()).unwrap();
        assert_eq!(map.plants["web"].seed, "web");
    }

    #[test]
    fn missing_map_document_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = load_garden_map(temp.path()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn broken_yaml_is_a_parse_error() {
        let garden = make_garden("plants: [unclosed");
        let err = load_garden_map(garden.path()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.to_string().contains("map.yml"), "err = {err}");
    }

    #[test]
    fn wrong_value_shape_is_a_parse_error() {
        // `vars` must map keys to strings.
        let garden = make_garden(
            r#"
plants:
  web:
    path: /srv/web
    seed: web
    vars:
      PORT: [8080]
"#,
        );
        let err = load_garden_map(garden.path()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Parse);
    }

    // ── discovery ─────────────────────────────────────────────────────────

    #[test]
    fn probes_working_directory_first() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir(cwd.path().join(".garden")).unwrap();
        fs::create_dir(home.path().join(".garden")).unwrap();

        let found = find_garden_dir_in(cwd.path(), Some(home.path().to_path_buf())).unwrap();
        assert_eq!(found, cwd.path().join(".garden"));
    }

    #[test]
    fn falls_back_to_home_directory() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join(".garden")).unwrap();

        let found = find_garden_dir_in(cwd.path(), Some(home.path().to_path_buf())).unwrap();
        assert_eq!(found, home.path().join(".garden"));
    }

    #[test]
    fn no_garden_anywhere_is_not_found() {
        let cwd = TempDir::new().unwrap();
        let err = find_garden_dir_in(cwd.path(), None).unwrap_err();
        assert!(matches!(
            err,
            GardenError::Application(ApplicationError::GardenDirNotFound)
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn a_plain_file_named_garden_does_not_count() {
        let cwd = TempDir::new().unwrap();
        fs::write(cwd.path().join(".garden"), "not a directory").unwrap();

        let err = find_garden_dir_in(cwd.path(), None).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn explicit_directory_bypasses_discovery() {
        let garden = make_garden(FULL_MAP);
        let resolved = resolve_garden_dir(Some(garden.path())).unwrap();
        assert_eq!(resolved, garden.path());
    }

    #[test]
    fn explicit_relative_directory_is_absolutized() {
        let resolved = resolve_garden_dir(Some(Path::new("some/garden"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/garden"));
    }

    #[test]
    fn open_garden_returns_directory_and_map() {
        let garden = make_garden(FULL_MAP);
        let (dir, map) = open_garden(Some(garden.path())).unwrap();
        assert_eq!(dir, garden.path());
        assert!(map.plants.contains_key("api-prod"));
    }
}
