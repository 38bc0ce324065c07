//! Implementation of the `garden grow` command.
//!
//! Responsibility: locate the garden, select plants, and drive the core
//! grow service one plant at a time so progress is visible. The pipeline
//! itself lives in `garden_core::application::GrowService`.

use tracing::{info, instrument};

use garden_adapters::{LocalFilesystem, TeraEngine};
use garden_core::application::GrowService;

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `garden grow` command.
///
/// Dispatch sequence:
/// 1. Resolve the garden directory and load `map.yml`
/// 2. Apply the `--plant` / `--zone` selection
/// 3. Grow each selected plant in identifier order; stop at the first failure
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Locate the garden and load its map
    let (garden_dir, map) = super::open_garden(&global, &config)?;

    // 2. Work out which plants to grow
    let plant_ids = super::select_plants(&map, &global)?;
    if plant_ids.is_empty() {
        output.warning("The garden map declares no plants; nothing to grow.")?;
        return Ok(());
    }

    // 3. Build the service on the local adapters
    let service = GrowService::new(Box::new(LocalFilesystem::new()), Box::new(TeraEngine::new()));

    output.header(&format!(
        "Growing {} plant(s) from {}",
        plant_ids.len(),
        garden_dir.display()
    ))?;

    for plant_id in &plant_ids {
        info!(plant = %plant_id, "Grow started");

        if let Err(e) = service.grow_plant(&map, plant_id, &garden_dir) {
            output.error(&format!("plant '{plant_id}' failed"))?;
            return Err(CliError::Core(e));
        }

        // The destination is recomputed here only for display; the service
        // resolved it independently.
        let destination = map
            .plant(plant_id)
            .map(|p| p.expanded_path(plant_id))
            .unwrap_or_default();
        output.success(&format!("{plant_id} \u{2192} {destination}"))?; // →

        info!(plant = %plant_id, "Grow completed");
    }

    if plant_ids.len() > 1 {
        output.print("")?;
        output.success(&format!("Grew {} plants.", plant_ids.len()))?;
    }

    Ok(())
}
