//! CLI command implementations.
//!
//! Each submodule translates parsed arguments into core service calls and
//! displays results. The helpers here cover the two steps every command
//! starts with: locating the garden and selecting plants.

use std::path::PathBuf;

use garden_adapters::map_loader;
use garden_core::domain::{GardenMap, PlantFilter};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod grow;
pub mod reap;
pub mod view;

/// Locate the garden directory and load its map.
///
/// Precedence for an explicit location: the `--garden-dir` flag (or the
/// `GARDEN_DIR` environment variable, which clap folds into the same arg),
/// then `garden.dir` from the config file. Without either, the usual
/// discovery runs: `./.garden` first, `~/.garden` as the fallback.
pub(crate) fn open_garden(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<(PathBuf, GardenMap)> {
    let explicit = global
        .garden_dir
        .as_deref()
        .or(config.garden.dir.as_deref());
    Ok(map_loader::open_garden(explicit)?)
}

/// Apply the `--plant` / `--zone` selection to the map.
///
/// An explicit selection that matches nothing is an error; an unfiltered
/// empty garden is not, and yields an empty list for the caller to report.
pub(crate) fn select_plants(map: &GardenMap, global: &GlobalArgs) -> CliResult<Vec<String>> {
    let filter = global.plant_filter();
    let ids = map.filtered_plant_ids(&filter);

    if ids.is_empty() && !filter.is_unfiltered() {
        return Err(CliError::NoPlantsSelected {
            selection: describe_selection(&filter),
        });
    }

    Ok(ids)
}

fn describe_selection(filter: &PlantFilter) -> String {
    match (&filter.plant, &filter.zone) {
        (Some(plant), _) => format!("--plant '{plant}'"),
        (None, Some(zone)) => format!("--zone '{zone}'"),
        (None, None) => "the selection".into(),
    }
}
