//! Reap Service - run an external command per plant.
//!
//! The command sees the parent environment plus the plant's injected pairs
//! (`_GARDEN_PLANT_PATH`, `_GARDEN_PLANT_ID`, `_GARDENVAR_<KEY>` per
//! resolved var) and inherits stdin/stdout/stderr. The injected vars come
//! from the fully resolved inventory, zone overlays included, not just the
//! plant-local ones.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{CommandSpec, Filesystem, ProcessRunner},
    domain::{GardenMap, TemplateInventory},
    error::GardenResult,
};

/// Runs caller-supplied commands inside plant environments.
pub struct ReapService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
}

impl ReapService {
    /// Create a new reap service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Reap every plant in `plant_ids`, in order.
    ///
    /// A launch failure or non-zero exit aborts the run at that plant.
    pub fn reap_plants(
        &self,
        map: &GardenMap,
        plant_ids: &[String],
        program: &str,
        args: &[String],
    ) -> GardenResult<()> {
        for plant_id in plant_ids {
            self.reap_plant(map, plant_id, program, args)?;
        }
        Ok(())
    }

    /// Run `program args...` once for one plant.
    #[instrument(skip_all, fields(plant = %plant_id, program = %program))]
    pub fn reap_plant(
        &self,
        map: &GardenMap,
        plant_id: &str,
        program: &str,
        args: &[String],
    ) -> GardenResult<()> {
        let plant = map.plant(plant_id)?;
        let plant_path = self
            .filesystem
            .absolutize(Path::new(&plant.expanded_path(plant_id)))?;
        let inventory =
            TemplateInventory::new(plant_id, &plant_path, map.vars_for_plant(plant_id)?);

        let spec = CommandSpec {
            program: program.to_owned(),
            args: args.to_vec(),
            env: inventory.child_env(),
        };
        self.runner.run(&spec)?;
        info!("plant reaped");
        Ok(())
    }
}
