//! Garden directory layout conventions.
//!
//! | Item             | Convention                    |
//! |------------------|-------------------------------|
//! | Garden directory | `./.garden`, then `~/.garden` |
//! | Map document     | `<garden>/map.yml`            |
//! | Seed trees       | `<garden>/seeds/<seed>/...`   |
//! | Template marker  | file name ends in `.template` |
//! | Path placeholder | `$_GARDEN_PLANT_ID`           |
//!
//! Pure path construction only; existence checks and reads live behind the
//! application ports.

use std::path::{Path, PathBuf};

/// Name of the garden directory probed during discovery, both under the
/// current working directory and under the user's home directory.
pub const GARDEN_DIR_NAME: &str = ".garden";

/// File name of the map document inside the garden directory.
pub const MAP_FILE: &str = "map.yml";

/// Subdirectory of the garden holding seed template trees.
pub const SEEDS_DIR: &str = "seeds";

/// Marker suffix identifying template files inside a seed.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Placeholder token in a plant's declared path, replaced by the plant id.
pub const PLANT_ID_TOKEN: &str = "$_GARDEN_PLANT_ID";

/// Path of the map document for a garden directory.
pub fn map_path(garden_dir: &Path) -> PathBuf {
    garden_dir.join(MAP_FILE)
}

/// Directory a seed is expected at under the garden root.
pub fn seed_dir(garden_dir: &Path, seed: &str) -> PathBuf {
    garden_dir.join(SEEDS_DIR).join(seed)
}

/// Whether a file name carries the template marker suffix.
pub fn is_template_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TEMPLATE_SUFFIX))
}

/// Output path for an evaluated template file: the sibling with the marker
/// suffix stripped. Paths without the suffix are returned unchanged.
pub fn rendered_path(template_path: &Path) -> PathBuf {
    match template_path.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.ends_with(TEMPLATE_SUFFIX) => {
            let stripped = &name[..name.len() - TEMPLATE_SUFFIX.len()];
            template_path.with_file_name(stripped)
        }
        _ => template_path.to_path_buf(),
    }
}
