//! Implementation of the `garden view` command.

use serde::Serialize;

use garden_core::domain::{GardenMap, VarMap};

use crate::{
    cli::{ViewArgs, ViewFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of `garden view` output: a plant with its resolution applied.
///
/// `vars` holds the fully resolved overlay (plant > zones), the same
/// bindings grow and reap will see, not just the plant-local ones.
#[derive(Debug, Serialize)]
struct PlantView {
    id: String,
    path: String,
    expanded_path: String,
    seed: String,
    zones: Vec<String>,
    vars: VarMap,
}

pub fn execute(
    args: ViewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (garden_dir, map) = super::open_garden(&global, &config)?;
    let plant_ids = super::select_plants(&map, &global)?;
    let views = collect_views(&map, &plant_ids)?;

    match args.format {
        ViewFormat::Table => {
            output.header(&format!("Garden at {}", garden_dir.display()))?;
            if views.is_empty() {
                output.warning("The garden map declares no plants.")?;
                return Ok(());
            }
            for view in &views {
                output.print("")?;
                output.print(&view.id)?;
                output.print(&format!("  path:     {}", view.path))?;
                output.print(&format!("  expanded: {}", view.expanded_path))?;
                output.print(&format!("  seed:     {}", dash_if_empty(&view.seed)))?;
                output.print(&format!("  zones:    {}", join_or_dash(&view.zones)))?;
                if view.vars.is_empty() {
                    output.print("  vars:     -")?;
                } else {
                    output.print("  vars:")?;
                    for (key, value) in &view.vars {
                        output.print(&format!("    {key} = {value}"))?;
                    }
                }
            }
        }

        ViewFormat::List => {
            for view in &views {
                println!("{}", view.id);
            }
        }

        ViewFormat::Json => {
            // Straight to stdout: JSON must stay parseable in non-TTY pipes
            // and under --quiet, so it bypasses the OutputManager.
            let json = serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

fn collect_views(map: &GardenMap, plant_ids: &[String]) -> CliResult<Vec<PlantView>> {
    plant_ids
        .iter()
        .map(|id| {
            let plant = map.plant(id).map_err(|e| CliError::Core(e.into()))?;
            let vars = map.vars_for_plant(id).map_err(|e| CliError::Core(e.into()))?;
            Ok(PlantView {
                id: id.clone(),
                path: plant.path.clone(),
                expanded_path: plant.expanded_path(id),
                seed: plant.seed.clone(),
                zones: plant.zones.clone(),
                vars,
            })
        })
        .collect()
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".into()
    } else {
        items.join(", ")
    }
}
