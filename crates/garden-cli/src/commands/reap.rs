//! Implementation of the `garden reap` command.
//!
//! Responsibility: locate the garden, select plants, and run the trailing
//! command once per plant through the core reap service. Environment
//! injection and exit-status checking live in the service and the
//! process-runner adapter.

use tracing::{info, instrument};

use garden_adapters::{LocalFilesystem, LocalProcessRunner};
use garden_core::application::ReapService;

use crate::{
    cli::{ReapArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `garden reap` command.
///
/// Dispatch sequence:
/// 1. Resolve the garden directory and load `map.yml`
/// 2. Apply the `--plant` / `--zone` selection
/// 3. Split the trailing words into program + arguments
/// 4. Run the command per plant in identifier order; stop at the first failure
#[instrument(skip_all, fields(command = %args.command.join(" ")))]
pub fn execute(
    args: ReapArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Locate the garden and load its map
    let (_garden_dir, map) = super::open_garden(&global, &config)?;

    // 2. Work out which plants to visit
    let plant_ids = super::select_plants(&map, &global)?;
    if plant_ids.is_empty() {
        output.warning("The garden map declares no plants; nothing to reap.")?;
        return Ok(());
    }

    // 3. First word is the program, the rest are its arguments
    let (program, prog_args) = args
        .command
        .split_first()
        .expect("clap marks COMMAND as required");

    let service = ReapService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LocalProcessRunner::new()),
    );

    // 4. Run sequentially; a non-zero exit anywhere aborts the rest
    for plant_id in &plant_ids {
        output.header(&format!("\u{1f33f} {plant_id}"))?; // 🌿
        info!(plant = %plant_id, program = %program, "Reap started");

        if let Err(e) = service.reap_plant(&map, plant_id, program, prog_args) {
            output.error(&format!("plant '{plant_id}' failed"))?;
            return Err(CliError::Core(e));
        }

        info!(plant = %plant_id, "Reap completed");
    }

    output.success(&format!(
        "Ran `{}` across {} plant(s).",
        args.command.join(" "),
        plant_ids.len()
    ))?;

    Ok(())
}
