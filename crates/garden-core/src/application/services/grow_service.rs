//! Grow Service - the template materialization pipeline.
//!
//! This service runs the per-plant state machine:
//! 1. Locate the seed under `<garden>/seeds/`
//! 2. Stage the seed's contents into a fresh temporary directory
//! 3. Resolve the variable inventory (zones, plant vars, implicit bindings)
//! 4. Evaluate every `*.template` file inside the staging directory
//! 5. Commit the staged tree to the plant's expanded absolute path
//! 6. Remove the staging directory
//!
//! Only step 5 touches the real destination, so a failed evaluation leaves
//! it exactly as it was. First failure is terminal for the plant; no partial
//! retry.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateEngine},
    },
    domain::{GardenMap, TemplateInventory, layout},
    error::GardenResult,
};

/// Materializes plants from their seeds.
pub struct GrowService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn TemplateEngine>,
}

impl GrowService {
    /// Create a new grow service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, engine: Box<dyn TemplateEngine>) -> Self {
        Self { filesystem, engine }
    }

    /// Grow every plant in `plant_ids`, in order.
    ///
    /// The first failure aborts the run; already-grown plants are not
    /// rolled back.
    pub fn grow_plants(
        &self,
        map: &GardenMap,
        plant_ids: &[String],
        garden_dir: &Path,
    ) -> GardenResult<()> {
        for plant_id in plant_ids {
            self.grow_plant(map, plant_id, garden_dir)?;
        }
        Ok(())
    }

    /// Run the full materialization pipeline for one plant.
    #[instrument(skip_all, fields(plant = %plant_id))]
    pub fn grow_plant(
        &self,
        map: &GardenMap,
        plant_id: &str,
        garden_dir: &Path,
    ) -> GardenResult<()> {
        let plant = map.plant(plant_id)?;

        // 1. Locate seed
        let seed_dir = layout::seed_dir(garden_dir, &plant.seed);
        if !self.filesystem.dir_exists(&seed_dir) {
            return Err(ApplicationError::SeedNotFound { path: seed_dir }.into());
        }

        // 2. Stage the seed's contents in isolation; the seed library is
        //    never mutated.
        let staging = self.filesystem.create_staging_dir()?;
        debug!(staging = %staging.display(), "staging seed contents");
        self.filesystem.mirror_contents(&seed_dir, &staging)?;

        // 3. Resolve variables, plus the implicit plant id/path bindings
        let plant_path = self
            .filesystem
            .absolutize(Path::new(&plant.expanded_path(plant_id)))?;
        let inventory =
            TemplateInventory::new(plant_id, &plant_path, map.vars_for_plant(plant_id)?);

        // 4. Evaluate templates inside the staging directory
        self.evaluate_templates(&staging, &inventory)?;

        // 5. Commit to the expanded path, overwriting existing files
        self.filesystem.create_dir_all(&plant_path)?;
        self.filesystem.mirror_contents(&staging, &plant_path)?;

        // 6. Cleanup; a failure here is reported but the commit stands
        self.filesystem.remove_dir_all(&staging)?;

        info!(path = %plant_path.display(), "plant grown");
        Ok(())
    }

    fn evaluate_templates(
        &self,
        root: &Path,
        inventory: &TemplateInventory,
    ) -> GardenResult<()> {
        let templates = self
            .filesystem
            .files_with_suffix(root, layout::TEMPLATE_SUFFIX)?;
        debug!(count = templates.len(), "evaluating template files");
        for template_path in &templates {
            self.evaluate_one(template_path, inventory)?;
        }
        Ok(())
    }

    /// Evaluate one template file: write the rendered sibling, carry the
    /// original's permission bits over, drop the original.
    fn evaluate_one(
        &self,
        template_path: &Path,
        inventory: &TemplateInventory,
    ) -> GardenResult<()> {
        let content = self.filesystem.read_to_string(template_path)?;
        let rendered = self.engine.render(&content, inventory).map_err(|source| {
            ApplicationError::TemplateEvaluation {
                file: template_path.to_path_buf(),
                source,
            }
        })?;

        let output_path = layout::rendered_path(template_path);
        self.filesystem.write_file(&output_path, &rendered)?;
        self.filesystem
            .copy_permissions(template_path, &output_path)?;
        self.filesystem.remove_file(template_path)?;
        Ok(())
    }
}
